//! Habit model and derived per-day calendar records

use chrono::NaiveTime;
use std::collections::BTreeSet;

use crate::consts::{ALL_WEEKDAYS, DEFAULT_ICON, REMINDER_FORMAT};
use crate::core::calendar::{CalendarDay, completion_days};
use crate::core::streak::compute_streak;
use crate::error::AppError;
use crate::utils::Timezone;

/// A tracked habit as persisted by the store
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Habit {
    pub(crate) id: String,
    pub(crate) title: String,
    pub(crate) icon: String,
    /// Cached projection of `completed_dates`, see `refresh_streak`
    pub(crate) current_streak: u32,
    /// Completion timestamps in epoch milliseconds
    pub(crate) completed_dates: Vec<i64>,
    /// "HH:MM", metadata only
    pub(crate) reminder_time: Option<String>,
    /// 1 = Sunday .. 7 = Saturday
    pub(crate) days_of_week: Vec<u8>,
    pub(crate) created_at: i64,
}

impl Habit {
    pub(crate) fn new(title: &str, created_at: i64) -> Result<Self, AppError> {
        Ok(Habit {
            id: uuid::Uuid::new_v4().to_string(),
            title: validate_title(title)?,
            icon: DEFAULT_ICON.to_string(),
            current_streak: 0,
            completed_dates: Vec::new(),
            reminder_time: None,
            days_of_week: ALL_WEEKDAYS.to_vec(),
            created_at,
        })
    }

    pub(crate) fn set_title(&mut self, title: &str) -> Result<(), AppError> {
        self.title = validate_title(title)?;
        Ok(())
    }

    pub(crate) fn completion_days(&self, tz: Timezone) -> BTreeSet<CalendarDay> {
        completion_days(&self.completed_dates, tz)
    }

    pub(crate) fn is_completed_on(&self, day: CalendarDay, tz: Timezone) -> bool {
        self.completed_dates
            .iter()
            .any(|&ts| tz.day_of(ts) == Some(day))
    }

    /// Flip completion for `day` and recompute the streak cache.
    /// Returns whether the day is completed afterwards.
    pub(crate) fn toggle_day(&mut self, day: CalendarDay, tz: Timezone, today: CalendarDay) -> bool {
        let completed = if self.is_completed_on(day, tz) {
            self.completed_dates.retain(|&ts| tz.day_of(ts) != Some(day));
            false
        } else {
            self.completed_dates.push(tz.start_of_day_ms(day));
            self.completed_dates.sort_unstable();
            true
        };
        self.refresh_streak(today, tz);
        completed
    }

    /// Recompute `current_streak` from the completion set. Returns true if it changed.
    pub(crate) fn refresh_streak(&mut self, today: CalendarDay, tz: Timezone) -> bool {
        let streak = compute_streak(&self.completed_dates, today, tz);
        let changed = streak != self.current_streak;
        self.current_streak = streak;
        changed
    }

    pub(crate) fn is_daily(&self) -> bool {
        self.days_of_week.len() == ALL_WEEKDAYS.len()
    }
}

fn validate_title(title: &str) -> Result<String, AppError> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(AppError::EmptyTitle);
    }
    Ok(trimmed.to_string())
}

/// Parse and normalize an "HH:MM" reminder time
pub(crate) fn parse_reminder(input: &str) -> Result<String, AppError> {
    NaiveTime::parse_from_str(input.trim(), REMINDER_FORMAT)
        .map(|t| t.format(REMINDER_FORMAT).to_string())
        .map_err(|_| AppError::InvalidReminder {
            input: input.to_string(),
        })
}

/// Parse a comma separated weekday list ("1,3,5") into a sorted, deduplicated set
pub(crate) fn parse_weekdays(input: &str) -> Result<Vec<u8>, AppError> {
    let mut days = BTreeSet::new();
    for part in input.split(',').map(str::trim).filter(|p| !p.is_empty()) {
        let day = part
            .parse::<u8>()
            .ok()
            .filter(|d| (1..=7).contains(d))
            .ok_or_else(|| AppError::InvalidWeekday {
                input: part.to_string(),
            })?;
        days.insert(day);
    }
    if days.is_empty() {
        return Err(AppError::InvalidWeekday {
            input: input.to_string(),
        });
    }
    Ok(days.into_iter().collect())
}

/// Categorical status of one calendar day
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum DayStatus {
    /// Every habit done
    Completed,
    /// Some but not all habits done
    Partial,
    /// Elapsed day with nothing done
    Missed,
    /// After today
    Future,
    /// No habits exist
    Empty,
}

impl DayStatus {
    pub(crate) fn as_str(self) -> &'static str {
        match self {
            DayStatus::Completed => "completed",
            DayStatus::Partial => "partial",
            DayStatus::Missed => "missed",
            DayStatus::Future => "future",
            DayStatus::Empty => "empty",
        }
    }
}

/// Derived aggregate for one day of a monthly calendar
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DayStat {
    pub(crate) day: CalendarDay,
    /// Start-of-day timestamp in epoch milliseconds
    pub(crate) timestamp: i64,
    pub(crate) status: DayStatus,
    /// Fraction of habits completed, in [0, 1]
    pub(crate) ratio: f64,
}
