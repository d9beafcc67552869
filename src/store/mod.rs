//! Habit persistence
//!
//! Habits live in a single SQLite table; completion lists and schedules are
//! stored as JSON arrays.

mod repo;
mod schema;

use std::path::PathBuf;

use crate::consts::DB_ENV_VAR;

pub(crate) use repo::{HabitStore, resolve_habit};

/// Database path, by precedence: CLI flag, environment, config, data dir
pub(crate) fn resolve_db_path(cli: Option<&str>, config: Option<&str>) -> Option<PathBuf> {
    if let Some(path) = cli {
        return Some(PathBuf::from(path));
    }
    if let Some(path) = std::env::var_os(DB_ENV_VAR).filter(|p| !p.is_empty()) {
        return Some(PathBuf::from(path));
    }
    if let Some(path) = config {
        return Some(PathBuf::from(path));
    }
    default_db_path()
}

/// Get the default database location
pub(crate) fn default_db_path() -> Option<PathBuf> {
    let data_dir = dirs::data_dir().or_else(|| dirs::home_dir().map(|h| h.join(".local").join("share")))?;
    Some(data_dir.join("habitcal").join("habits.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cli_path_wins() {
        let path = resolve_db_path(Some("/tmp/a.db"), Some("/tmp/b.db"));
        assert_eq!(path, Some(PathBuf::from("/tmp/a.db")));
    }

    #[test]
    fn default_path_ends_in_habitcal() {
        if let Some(path) = default_db_path() {
            assert!(path.ends_with("habitcal/habits.db"));
        }
    }
}
