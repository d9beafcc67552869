use chrono::offset::Offset;
use chrono::{DateTime, Duration, FixedOffset, Local, NaiveDate, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use std::str::FromStr;

use crate::error::AppError;

/// Zone in which timestamps are bucketed into calendar days
#[derive(Debug, Clone, Copy)]
pub(crate) enum Timezone {
    Local,
    Named(Tz),
}

impl Timezone {
    pub(crate) fn parse(value: Option<&str>) -> Result<Self, AppError> {
        let Some(raw) = value else {
            return Ok(Timezone::Local);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("local") {
            return Ok(Timezone::Local);
        }
        if trimmed.eq_ignore_ascii_case("utc") || trimmed.eq_ignore_ascii_case("z") {
            return Ok(Timezone::Named(chrono_tz::UTC));
        }
        Tz::from_str(trimmed)
            .map(Timezone::Named)
            .map_err(|_| AppError::InvalidTimezone {
                input: trimmed.to_string(),
            })
    }

    pub(crate) fn to_fixed_offset(self, utc: DateTime<Utc>) -> DateTime<FixedOffset> {
        match self {
            Timezone::Local => {
                let local = utc.with_timezone(&Local);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
            Timezone::Named(tz) => {
                let local = utc.with_timezone(&tz);
                let offset = local.offset().fix();
                local.with_timezone(&offset)
            }
        }
    }

    /// Calendar day an epoch-millisecond timestamp falls on.
    /// `None` when the timestamp is outside chrono's range.
    pub(crate) fn day_of(self, ts_ms: i64) -> Option<NaiveDate> {
        let utc = DateTime::<Utc>::from_timestamp_millis(ts_ms)?;
        Some(self.to_fixed_offset(utc).date_naive())
    }

    /// Epoch milliseconds of the first instant of `day`
    pub(crate) fn start_of_day_ms(self, day: NaiveDate) -> i64 {
        let resolved = match self {
            Timezone::Local => first_instant(&Local, day),
            Timezone::Named(tz) => first_instant(&tz, day),
        };
        resolved.unwrap_or_else(|| day.and_time(NaiveTime::MIN).and_utc().timestamp_millis())
    }

    /// Today's date in this zone, read from the wall clock
    pub(crate) fn today(self) -> NaiveDate {
        self.to_fixed_offset(Utc::now()).date_naive()
    }
}

// Midnight can fall inside a DST gap; the next hour always exists.
fn first_instant<Z: TimeZone>(zone: &Z, day: NaiveDate) -> Option<i64> {
    let midnight = day.and_time(NaiveTime::MIN);
    (0..=1).find_map(|h| {
        zone.from_local_datetime(&(midnight + Duration::hours(h)))
            .earliest()
            .map(|dt| dt.timestamp_millis())
    })
}
