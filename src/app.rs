use chrono::Utc;

use crate::cli::{Cli, Commands};
use crate::consts::DATE_FORMAT;
use crate::core::{CalendarDay, Habit, MonthNames, month_view, parse_reminder, parse_weekdays};
use crate::error::AppError;
use crate::output::{
    CalendarOptions, DailySummary, HabitListEntry, output_calendar_json, output_habit_json,
    output_habits_json, output_summary_json, print_calendar, print_habit_table, print_summary,
    short_id,
};
use crate::store::{HabitStore, resolve_habit};
use crate::utils::{Timezone, debug_log, parse_date};

pub(crate) struct CommandContext<'a> {
    pub(crate) cli: &'a Cli,
    pub(crate) store: &'a HabitStore,
    pub(crate) timezone: Timezone,
    pub(crate) today: CalendarDay,
    pub(crate) names: MonthNames,
}

impl CommandContext<'_> {
    /// Load all habits, bringing each cached streak up to date with `today`
    fn load_habits(&self) -> Result<Vec<Habit>, AppError> {
        let mut habits = self.store.list_habits()?;
        for habit in &mut habits {
            let previous = habit.current_streak;
            if habit.refresh_streak(self.today, self.timezone) {
                debug_log(format!(
                    "Streak for {} changed {} -> {}",
                    short_id(&habit.id),
                    previous,
                    habit.current_streak
                ));
                self.store.update_streak(&habit.id, habit.current_streak)?;
            }
        }
        Ok(habits)
    }

    fn find_habit(&self, query: &str) -> Result<Habit, AppError> {
        let habits = self.load_habits()?;
        resolve_habit(&habits, query).cloned()
    }

    fn print_habit(&self, habit: &Habit) -> Result<(), AppError> {
        let entry = HabitListEntry::new(habit, self.today, self.timezone);
        println!("{}", output_habit_json(&entry)?);
        Ok(())
    }
}

fn handle_list(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let habits = ctx.load_habits()?;
    let entries: Vec<HabitListEntry<'_>> = habits
        .iter()
        .map(|h| HabitListEntry::new(h, ctx.today, ctx.timezone))
        .collect();
    if ctx.cli.json {
        println!("{}", output_habits_json(&entries)?);
    } else {
        print_habit_table(&entries, ctx.cli.use_color());
    }
    Ok(())
}

struct HabitFields<'a> {
    title: Option<&'a str>,
    icon: Option<&'a str>,
    reminder: Option<&'a str>,
    clear_reminder: bool,
    days: Option<&'a str>,
}

fn apply_fields(habit: &mut Habit, fields: HabitFields<'_>) -> Result<(), AppError> {
    if let Some(title) = fields.title {
        habit.set_title(title)?;
    }
    if let Some(icon) = fields.icon.map(str::trim).filter(|i| !i.is_empty()) {
        habit.icon = icon.to_string();
    }
    if fields.clear_reminder {
        habit.reminder_time = None;
    } else if let Some(reminder) = fields.reminder {
        habit.reminder_time = Some(parse_reminder(reminder)?);
    }
    if let Some(days) = fields.days {
        habit.days_of_week = parse_weekdays(days)?;
    }
    Ok(())
}

fn handle_add(ctx: &CommandContext<'_>, title: &str, fields: HabitFields<'_>) -> Result<(), AppError> {
    let mut habit = Habit::new(title, Utc::now().timestamp_millis())?;
    apply_fields(&mut habit, fields)?;
    ctx.store.insert_habit(&habit)?;
    debug_log(format!("Inserted habit {}", habit.id));

    if ctx.cli.json {
        return ctx.print_habit(&habit);
    }
    println!(
        "Added {} {} ({})",
        habit.icon,
        habit.title,
        short_id(&habit.id)
    );
    Ok(())
}

fn handle_edit(ctx: &CommandContext<'_>, query: &str, fields: HabitFields<'_>) -> Result<(), AppError> {
    let mut habit = ctx.find_habit(query)?;
    apply_fields(&mut habit, fields)?;
    ctx.store.update_habit(&habit)?;

    if ctx.cli.json {
        return ctx.print_habit(&habit);
    }
    println!("Updated {} {}", habit.icon, habit.title);
    Ok(())
}

fn handle_remove(ctx: &CommandContext<'_>, query: &str) -> Result<(), AppError> {
    let habit = ctx.find_habit(query)?;
    if !ctx.store.delete_habit(&habit.id)? {
        return Err(AppError::HabitNotFound {
            query: query.to_string(),
        });
    }

    if ctx.cli.json {
        return ctx.print_habit(&habit);
    }
    println!("Removed {} {}", habit.icon, habit.title);
    Ok(())
}

fn handle_toggle(ctx: &CommandContext<'_>, query: &str, date: Option<&str>) -> Result<(), AppError> {
    let day = date.map(parse_date).transpose()?.unwrap_or(ctx.today);
    let mut habit = ctx.find_habit(query)?;
    let done = habit.toggle_day(day, ctx.timezone, ctx.today);
    ctx.store.update_habit(&habit)?;
    debug_log(format!(
        "Toggled {} on {} (done: {done})",
        short_id(&habit.id),
        day.format(DATE_FORMAT)
    ));

    if ctx.cli.json {
        return ctx.print_habit(&habit);
    }
    let action = if done { "Marked" } else { "Unmarked" };
    println!(
        "{action} {} {} on {} · streak {}",
        habit.icon,
        habit.title,
        day.format(DATE_FORMAT),
        habit.current_streak
    );
    Ok(())
}

fn handle_calendar(ctx: &CommandContext<'_>, offset: i32) -> Result<(), AppError> {
    let habits = ctx.load_habits()?;
    let view = month_view(&habits, offset, ctx.today, ctx.timezone, ctx.names);
    if ctx.cli.json {
        println!("{}", output_calendar_json(&view)?);
    } else {
        print_calendar(
            &view,
            CalendarOptions {
                use_color: ctx.cli.use_color(),
                today: ctx.today,
                names: ctx.names,
                habit_count: habits.len(),
            },
        );
    }
    Ok(())
}

fn handle_summary(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    let habits = ctx.load_habits()?;
    let summary = DailySummary::build(&habits, ctx.today, ctx.timezone);
    if ctx.cli.json {
        println!("{}", output_summary_json(&summary)?);
    } else {
        print_summary(&summary, ctx.cli.use_color());
    }
    Ok(())
}

/// Run the selected command, listing habits when none was given
pub(crate) fn handle_command(ctx: &CommandContext<'_>) -> Result<(), AppError> {
    match &ctx.cli.command {
        None | Some(Commands::List) => handle_list(ctx),
        Some(Commands::Add {
            title,
            icon,
            reminder,
            days,
        }) => handle_add(
            ctx,
            title,
            HabitFields {
                title: None,
                icon: icon.as_deref(),
                reminder: reminder.as_deref(),
                clear_reminder: false,
                days: days.as_deref(),
            },
        ),
        Some(Commands::Edit {
            habit,
            title,
            icon,
            reminder,
            no_reminder,
            days,
        }) => handle_edit(
            ctx,
            habit,
            HabitFields {
                title: title.as_deref(),
                icon: icon.as_deref(),
                reminder: reminder.as_deref(),
                clear_reminder: *no_reminder,
                days: days.as_deref(),
            },
        ),
        Some(Commands::Remove { habit }) => handle_remove(ctx, habit),
        Some(Commands::Toggle { habit, date }) => handle_toggle(ctx, habit, date.as_deref()),
        Some(Commands::Calendar { offset }) => handle_calendar(ctx, *offset),
        Some(Commands::Summary) => handle_summary(ctx),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fields_apply_and_validate() {
        let mut habit = Habit::new("Read", 0).unwrap();
        apply_fields(
            &mut habit,
            HabitFields {
                title: Some(" Read more "),
                icon: Some("📚"),
                reminder: Some("7:30"),
                clear_reminder: false,
                days: Some("2,4,6"),
            },
        )
        .unwrap();
        assert_eq!(habit.title, "Read more");
        assert_eq!(habit.icon, "📚");
        assert_eq!(habit.reminder_time.as_deref(), Some("07:30"));
        assert_eq!(habit.days_of_week, vec![2, 4, 6]);

        apply_fields(
            &mut habit,
            HabitFields {
                title: None,
                icon: Some("  "),
                reminder: None,
                clear_reminder: true,
                days: None,
            },
        )
        .unwrap();
        assert_eq!(habit.icon, "📚");
        assert_eq!(habit.reminder_time, None);
    }

    #[test]
    fn invalid_fields_are_rejected() {
        let mut habit = Habit::new("Read", 0).unwrap();
        let result = apply_fields(
            &mut habit,
            HabitFields {
                title: None,
                icon: None,
                reminder: None,
                clear_reminder: false,
                days: Some("0,9"),
            },
        );
        assert!(matches!(result, Err(AppError::InvalidWeekday { .. })));
    }
}
