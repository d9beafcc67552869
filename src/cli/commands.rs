//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// List habits with their streaks (default)
    List,
    /// Add a new habit
    Add {
        /// Habit title
        title: String,
        /// Emoji or short icon
        #[arg(long)]
        icon: Option<String>,
        /// Daily reminder time (HH:MM)
        #[arg(long, value_name = "HH:MM")]
        reminder: Option<String>,
        /// Scheduled weekdays, 1=Sun .. 7=Sat (e.g., "2,4,6")
        #[arg(long, value_name = "DAYS")]
        days: Option<String>,
    },
    /// Change a habit's title, icon, reminder or schedule
    Edit {
        /// Habit id, id prefix, or title
        habit: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        icon: Option<String>,
        #[arg(long, value_name = "HH:MM", conflicts_with = "no_reminder")]
        reminder: Option<String>,
        /// Clear the reminder
        #[arg(long)]
        no_reminder: bool,
        #[arg(long, value_name = "DAYS")]
        days: Option<String>,
    },
    /// Delete a habit
    Remove {
        /// Habit id, id prefix, or title
        habit: String,
    },
    /// Mark a day done, or undo it if already done
    Toggle {
        /// Habit id, id prefix, or title
        habit: String,
        /// Day to toggle (defaults to today)
        #[arg(short, long, value_name = "DATE")]
        date: Option<String>,
    },
    /// Show the monthly consistency calendar
    Calendar {
        /// Months relative to the current one (-1 = previous)
        #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
        offset: i32,
    },
    /// One-line overview: habits, best streak, done today
    Summary,
}
