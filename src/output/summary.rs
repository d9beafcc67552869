use crate::consts::DATE_FORMAT;
use crate::core::{CalendarDay, Habit, best_current_streak, weekday_number};
use crate::error::AppError;
use crate::output::format::{format_days, paint};
use crate::utils::Timezone;

/// Today's overview across all habits
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct DailySummary {
    pub(crate) date: CalendarDay,
    pub(crate) habits: usize,
    pub(crate) best_streak: u32,
    pub(crate) done_today: usize,
    /// Habits whose schedule includes today's weekday
    pub(crate) scheduled_today: usize,
}

impl DailySummary {
    pub(crate) fn build(habits: &[Habit], today: CalendarDay, tz: Timezone) -> Self {
        let weekday = weekday_number(today);
        DailySummary {
            date: today,
            habits: habits.len(),
            best_streak: best_current_streak(habits),
            done_today: habits.iter().filter(|h| h.is_completed_on(today, tz)).count(),
            scheduled_today: habits
                .iter()
                .filter(|h| h.days_of_week.contains(&weekday))
                .count(),
        }
    }
}

pub(crate) fn print_summary(summary: &DailySummary, use_color: bool) {
    let done = format!("{}/{}", summary.done_today, summary.habits);
    let done_code = if summary.habits > 0 && summary.done_today == summary.habits {
        "32"
    } else {
        "33"
    };
    println!(
        "{} | {} done today | {} scheduled | best streak {}",
        summary.date.format(DATE_FORMAT),
        paint(&done, done_code, use_color),
        summary.scheduled_today,
        paint(&format_days(summary.best_streak), "35", use_color),
    );
}

pub(crate) fn output_summary_json(summary: &DailySummary) -> Result<String, AppError> {
    let output = serde_json::json!({
        "date": summary.date.format(DATE_FORMAT).to_string(),
        "habits": summary.habits,
        "best_streak": summary.best_streak,
        "done_today": summary.done_today,
        "scheduled_today": summary.scheduled_today,
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
