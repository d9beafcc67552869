use rusqlite::{Connection, Row, params};
use std::path::Path;

use crate::core::Habit;
use crate::error::AppError;
use crate::utils::debug_log;

use super::schema::run_migrations;

const HABIT_COLUMNS: &str = "id, title, icon, current_streak, completed_dates, reminder_time, days_of_week, created_at";

/// SQLite-backed habit storage
pub(crate) struct HabitStore {
    conn: Connection,
}

/// Row as stored, JSON columns still encoded
struct HabitRow {
    id: String,
    title: String,
    icon: String,
    current_streak: i64,
    completed_dates: String,
    reminder_time: Option<String>,
    days_of_week: String,
    created_at: i64,
}

impl HabitRow {
    fn from_row(row: &Row) -> rusqlite::Result<Self> {
        Ok(HabitRow {
            id: row.get("id")?,
            title: row.get("title")?,
            icon: row.get("icon")?,
            current_streak: row.get("current_streak")?,
            completed_dates: row.get("completed_dates")?,
            reminder_time: row.get("reminder_time")?,
            days_of_week: row.get("days_of_week")?,
            created_at: row.get("created_at")?,
        })
    }

    fn into_habit(self) -> Result<Habit, AppError> {
        Ok(Habit {
            id: self.id,
            title: self.title,
            icon: self.icon,
            current_streak: u32::try_from(self.current_streak).unwrap_or(0),
            completed_dates: serde_json::from_str(&self.completed_dates)?,
            reminder_time: self.reminder_time,
            days_of_week: serde_json::from_str(&self.days_of_week)?,
            created_at: self.created_at,
        })
    }
}

impl HabitStore {
    /// Open or create a database at the given path
    pub(crate) fn open(path: &Path) -> Result<Self, AppError> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        debug_log(format!("Opening database {}", path.display()));

        let conn = Connection::open(path)?;
        conn.execute_batch("PRAGMA synchronous = NORMAL")?;
        run_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub(crate) fn open_in_memory() -> Result<Self, AppError> {
        let conn = Connection::open_in_memory()?;
        run_migrations(&conn)?;
        Ok(Self { conn })
    }

    /// All habits, oldest first
    pub(crate) fn list_habits(&self) -> Result<Vec<Habit>, AppError> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {HABIT_COLUMNS} FROM habits ORDER BY created_at, id"
        ))?;
        let rows = stmt
            .query_map([], HabitRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        rows.into_iter().map(HabitRow::into_habit).collect()
    }

    #[cfg(test)]
    pub(crate) fn get_habit(&self, id: &str) -> Result<Option<Habit>, AppError> {
        use rusqlite::OptionalExtension;

        let row = self
            .conn
            .query_row(
                &format!("SELECT {HABIT_COLUMNS} FROM habits WHERE id = ?1"),
                [id],
                HabitRow::from_row,
            )
            .optional()?;
        row.map(HabitRow::into_habit).transpose()
    }

    pub(crate) fn insert_habit(&self, habit: &Habit) -> Result<(), AppError> {
        self.conn.execute(
            &format!(
                "INSERT INTO habits ({HABIT_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)"
            ),
            params![
                habit.id,
                habit.title,
                habit.icon,
                i64::from(habit.current_streak),
                serde_json::to_string(&habit.completed_dates)?,
                habit.reminder_time,
                serde_json::to_string(&habit.days_of_week)?,
                habit.created_at,
            ],
        )?;
        Ok(())
    }

    /// Overwrite every mutable column of an existing habit
    pub(crate) fn update_habit(&self, habit: &Habit) -> Result<(), AppError> {
        let changed = self.conn.execute(
            r#"
            UPDATE habits SET
                title = ?2,
                icon = ?3,
                current_streak = ?4,
                completed_dates = ?5,
                reminder_time = ?6,
                days_of_week = ?7
            WHERE id = ?1
            "#,
            params![
                habit.id,
                habit.title,
                habit.icon,
                i64::from(habit.current_streak),
                serde_json::to_string(&habit.completed_dates)?,
                habit.reminder_time,
                serde_json::to_string(&habit.days_of_week)?,
            ],
        )?;
        if changed == 0 {
            return Err(AppError::HabitNotFound {
                query: habit.id.clone(),
            });
        }
        Ok(())
    }

    /// Persist only the cached streak
    pub(crate) fn update_streak(&self, id: &str, streak: u32) -> Result<(), AppError> {
        self.conn.execute(
            "UPDATE habits SET current_streak = ?2 WHERE id = ?1",
            params![id, i64::from(streak)],
        )?;
        Ok(())
    }

    /// Returns false when no habit had that id
    pub(crate) fn delete_habit(&self, id: &str) -> Result<bool, AppError> {
        let deleted = self.conn.execute("DELETE FROM habits WHERE id = ?1", [id])?;
        Ok(deleted > 0)
    }
}

/// Find a habit by exact id, unique id prefix, or case-insensitive title.
/// An ambiguous id prefix still falls through to the title match.
pub(crate) fn resolve_habit<'a>(habits: &'a [Habit], query: &str) -> Result<&'a Habit, AppError> {
    let query = query.trim();
    if let Some(h) = habits.iter().find(|h| h.id == query) {
        return Ok(h);
    }

    let by_prefix: Vec<&Habit> = if query.is_empty() {
        Vec::new()
    } else {
        habits.iter().filter(|h| h.id.starts_with(query)).collect()
    };
    if let [only] = by_prefix.as_slice() {
        return Ok(*only);
    }

    let folded = query.to_lowercase();
    let by_title: Vec<&Habit> = habits
        .iter()
        .filter(|h| h.title.to_lowercase() == folded)
        .collect();
    match (by_title.as_slice(), by_prefix.len()) {
        ([only], _) => Ok(*only),
        ([], 0) => Err(AppError::HabitNotFound {
            query: query.to_string(),
        }),
        ([], count) => Err(AppError::AmbiguousHabit {
            query: query.to_string(),
            count,
        }),
        (matches, _) => Err(AppError::AmbiguousHabit {
            query: query.to_string(),
            count: matches.len(),
        }),
    }
}
