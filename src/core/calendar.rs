//! Calendar-day bucketing shared by the streak and monthly aggregators
//!
//! A calendar day is an immutable `NaiveDate`; every timestamp is converted
//! once through a `Timezone` and all arithmetic happens on the date value.

use chrono::{Datelike, NaiveDate};
use std::collections::BTreeSet;

use crate::utils::Timezone;

/// A date without time of day, the unit of habit completion
pub(crate) type CalendarDay = NaiveDate;

/// Normalize completion timestamps into distinct calendar days.
/// Timestamps chrono cannot represent are dropped.
pub(crate) fn completion_days(timestamps: &[i64], tz: Timezone) -> BTreeSet<CalendarDay> {
    timestamps.iter().filter_map(|&ts| tz.day_of(ts)).collect()
}

/// Length of the month, or 0 when `(year, month)` is not a valid month
pub(crate) fn days_in_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1).map_or(0, |d| u32::from(d.num_days_in_month()))
}

/// Month reached by moving `offset` months from the month containing `today`.
/// Clamped to the years chrono can represent.
pub(crate) fn shift_month(today: CalendarDay, offset: i32) -> (i32, u32) {
    let min_index = i64::from(NaiveDate::MIN.year()) * 12;
    let max_index = i64::from(NaiveDate::MAX.year()) * 12 + 11;

    let index = i64::from(today.year()) * 12 + i64::from(today.month0()) + i64::from(offset);
    let index = index.clamp(min_index, max_index);

    let year = index.div_euclid(12) as i32;
    let month = index.rem_euclid(12) as u32 + 1;
    (year, month)
}

/// Every day of the given month in ascending order
pub(crate) fn month_days(year: i32, month: u32) -> impl Iterator<Item = CalendarDay> {
    (1..=days_in_month(year, month)).filter_map(move |day| NaiveDate::from_ymd_opt(year, month, day))
}

/// Weekday number with Sunday = 1 through Saturday = 7
pub(crate) fn weekday_number(day: CalendarDay) -> u8 {
    day.weekday().number_from_sunday() as u8
}
