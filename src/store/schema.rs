//! Database schema and migrations
//!
//! Migrations are applied in order and tracked with PRAGMA user_version.

use rusqlite::Connection;

use crate::error::AppError;
use crate::utils::debug_log;

/// Current schema version
pub(crate) const SCHEMA_VERSION: i32 = 2;

/// SQL migrations, indexed by version number - 1
const MIGRATIONS: &[&str] = &[
    // Version 1: habits with JSON-encoded completion list
    r#"
    CREATE TABLE IF NOT EXISTS habits (
        id               TEXT PRIMARY KEY,
        title            TEXT NOT NULL,
        icon             TEXT NOT NULL,
        current_streak   INTEGER NOT NULL DEFAULT 0,
        completed_dates  JSON NOT NULL DEFAULT '[]',
        reminder_time    TEXT,
        created_at       INTEGER NOT NULL
    );
    "#,
    // Version 2: weekday schedule, all days for existing rows
    r#"
    ALTER TABLE habits ADD COLUMN days_of_week JSON NOT NULL DEFAULT '[1,2,3,4,5,6,7]';
    CREATE INDEX IF NOT EXISTS idx_habits_created_at ON habits(created_at);
    "#,
];

pub(crate) fn run_migrations(conn: &Connection) -> Result<(), AppError> {
    let current_version = schema_version(conn)?;
    apply_migrations(conn, MIGRATIONS)?;
    if current_version < SCHEMA_VERSION {
        debug_log(format!(
            "Migrated database schema {current_version} -> {SCHEMA_VERSION}"
        ));
    }
    Ok(())
}

// Each step and its version bump commit together.
fn apply_migrations(conn: &Connection, migrations: &[&str]) -> Result<(), AppError> {
    let current_version = schema_version(conn)?;

    for (i, migration) in migrations.iter().enumerate() {
        let version = (i + 1) as i32;
        if version > current_version {
            debug_log(format!("Running migration {version}"));
            let tx = conn.unchecked_transaction()?;
            tx.execute_batch(migration)?;
            tx.execute_batch(&format!("PRAGMA user_version = {version}"))?;
            tx.commit()?;
        }
    }
    Ok(())
}

pub(crate) fn schema_version(conn: &Connection) -> Result<i32, AppError> {
    let version: i32 = conn.query_row("PRAGMA user_version", [], |r| r.get(0))?;
    Ok(version)
}
