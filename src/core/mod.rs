//! Core module - habit model, calendar bucketing, streak and monthly stats

mod calendar;
mod monthly;
mod streak;
mod types;

pub(crate) use calendar::{CalendarDay, weekday_number};
pub(crate) use monthly::{MonthNames, MonthSummary, MonthView, month_view};
pub(crate) use streak::{best_current_streak, longest_streak};
pub(crate) use types::{DayStat, DayStatus, Habit, parse_reminder, parse_weekdays};
