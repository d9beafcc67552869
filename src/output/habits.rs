use crate::core::{CalendarDay, Habit, longest_streak};
use crate::error::AppError;
use crate::output::format::{
    create_styled_table, format_days, header_cell, right_cell, schedule_label, short_id,
    streak_color, styled_cell,
};
use crate::utils::Timezone;

/// A habit with the figures shown next to it in listings
#[derive(Debug, Clone)]
pub(crate) struct HabitListEntry<'a> {
    pub(crate) habit: &'a Habit,
    pub(crate) longest_streak: u32,
    pub(crate) done_today: bool,
}

impl<'a> HabitListEntry<'a> {
    pub(crate) fn new(habit: &'a Habit, today: CalendarDay, tz: Timezone) -> Self {
        HabitListEntry {
            habit,
            longest_streak: longest_streak(&habit.completion_days(tz)),
            done_today: habit.is_completed_on(today, tz),
        }
    }
}

pub(crate) fn print_habit_table(entries: &[HabitListEntry<'_>], use_color: bool) {
    if entries.is_empty() {
        println!("No habits yet. Add one with `habitcal add <TITLE>`.");
        return;
    }

    let mut table = create_styled_table();
    table.set_header(
        ["ID", "Habit", "Today", "Streak", "Best", "Schedule", "Reminder"]
            .iter()
            .map(|h| header_cell(h, use_color))
            .collect::<Vec<_>>(),
    );

    for entry in entries {
        let h = entry.habit;
        let today = if entry.done_today { "✓" } else { "" };
        table.add_row(vec![
            styled_cell(short_id(&h.id), None, false),
            styled_cell(&format!("{} {}", h.icon, h.title), None, true),
            styled_cell(today, None, false),
            right_cell(
                &format_days(h.current_streak),
                streak_color(h.current_streak, use_color),
                h.current_streak > 0,
            ),
            right_cell(&format_days(entry.longest_streak), None, false),
            styled_cell(&schedule_label(&h.days_of_week), None, false),
            styled_cell(h.reminder_time.as_deref().unwrap_or("-"), None, false),
        ]);
    }

    println!("{table}");
}

fn habit_value(entry: &HabitListEntry<'_>) -> serde_json::Value {
    let h = entry.habit;
    serde_json::json!({
        "id": h.id,
        "title": h.title,
        "icon": h.icon,
        "current_streak": h.current_streak,
        "longest_streak": entry.longest_streak,
        "done_today": entry.done_today,
        "completed_dates": h.completed_dates,
        "reminder_time": h.reminder_time,
        "days_of_week": h.days_of_week,
        "daily": h.is_daily(),
        "created_at": h.created_at,
    })
}

pub(crate) fn output_habits_json(entries: &[HabitListEntry<'_>]) -> Result<String, AppError> {
    let output: Vec<serde_json::Value> = entries.iter().map(habit_value).collect();
    Ok(serde_json::to_string_pretty(&output)?)
}

pub(crate) fn output_habit_json(entry: &HabitListEntry<'_>) -> Result<String, AppError> {
    Ok(serde_json::to_string_pretty(&habit_value(entry))?)
}
