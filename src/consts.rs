/// Standard date format used throughout the codebase: "2025-01-15"
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// Reminder time format: "07:30"
pub(crate) const REMINDER_FORMAT: &str = "%H:%M";

/// Icon given to new habits
pub(crate) const DEFAULT_ICON: &str = "🌱";

/// Weekday numbers, Sunday = 1 through Saturday = 7
pub(crate) const ALL_WEEKDAYS: [u8; 7] = [1, 2, 3, 4, 5, 6, 7];

/// Environment variable overriding the database path
pub(crate) const DB_ENV_VAR: &str = "HABITCAL_DB";
