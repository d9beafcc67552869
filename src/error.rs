use thiserror::Error;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("Invalid date \"{input}\" (expected YYYYMMDD or YYYY-MM-DD)")]
    InvalidDate { input: String },

    #[error("Invalid timezone: {input}")]
    InvalidTimezone { input: String },

    #[error("Unsupported locale: {input}")]
    UnsupportedLocale { input: String },

    #[error("Invalid reminder time \"{input}\" (expected HH:MM)")]
    InvalidReminder { input: String },

    #[error("Invalid weekday \"{input}\" (expected 1=Sun .. 7=Sat)")]
    InvalidWeekday { input: String },

    #[error("Habit title cannot be empty")]
    EmptyTitle,

    #[error("No habit matches \"{query}\"")]
    HabitNotFound { query: String },

    #[error("\"{query}\" matches {count} habits, use a longer id prefix")]
    AmbiguousHabit { query: String, count: usize },

    #[error("Could not determine a data directory, pass --db or set HABITCAL_DB")]
    NoDataDir,

    #[error("Database error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_error_display_date() {
        let e = AppError::InvalidDate {
            input: "abc".to_string(),
        };
        assert_eq!(
            e.to_string(),
            r#"Invalid date "abc" (expected YYYYMMDD or YYYY-MM-DD)"#
        );
    }

    #[test]
    fn app_error_display_timezone() {
        let e = AppError::InvalidTimezone {
            input: "Mars/Olympus".to_string(),
        };
        assert_eq!(e.to_string(), "Invalid timezone: Mars/Olympus");
    }

    #[test]
    fn app_error_display_reminder() {
        let e = AppError::InvalidReminder {
            input: "25:00".to_string(),
        };
        assert_eq!(e.to_string(), r#"Invalid reminder time "25:00" (expected HH:MM)"#);
    }

    #[test]
    fn app_error_display_ambiguous() {
        let e = AppError::AmbiguousHabit {
            query: "ab".to_string(),
            count: 2,
        };
        assert_eq!(
            e.to_string(),
            r#""ab" matches 2 habits, use a longer id prefix"#
        );
    }

    #[test]
    fn app_error_from_json_error() {
        let json_err = serde_json::from_str::<Vec<i64>>("not json").unwrap_err();
        let app: AppError = json_err.into();
        assert!(app.to_string().starts_with("JSON error:"));
    }
}
