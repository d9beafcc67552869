mod calendar;
mod format;
mod habits;
mod summary;

pub(crate) use calendar::{CalendarOptions, output_calendar_json, print_calendar};
pub(crate) use format::short_id;
pub(crate) use habits::{HabitListEntry, output_habit_json, output_habits_json, print_habit_table};
pub(crate) use summary::{DailySummary, output_summary_json, print_summary};
