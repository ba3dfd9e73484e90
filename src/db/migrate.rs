//! Schema migrations.
//!
//! Each migration runs once; applied versions are recorded in the `log`
//! table with `operation = 'migration_applied'`.

use crate::errors::{AppError, AppResult};
use rusqlite::{Connection, OptionalExtension};

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250211_0001_create_work_days",
        description: "Created work_days table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS work_days (
            date        TEXT PRIMARY KEY,
            clock_in    TEXT,
            clock_out   TEXT,
            updated_at  TEXT NOT NULL DEFAULT (datetime('now', 'localtime')),
            CHECK (clock_out IS NULL OR clock_in IS NOT NULL)
        );
        "#,
    },
    Migration {
        version: "20250224_0002_normalize_day_keys",
        description: "Merged date keys carrying a time of day into plain day keys",
        // One row must survive per calendar day: a row with times wins over
        // an empty one; among legacy keys the oldest row wins.
        sql: r#"
        DELETE FROM work_days
         WHERE length(date) > 10
           AND EXISTS (
               SELECT 1 FROM work_days AS other
                WHERE length(other.date) > 10
                  AND substr(other.date, 1, 10) = substr(work_days.date, 1, 10)
                  AND other.rowid <> work_days.rowid
                  AND (
                        (other.clock_in IS NOT NULL AND work_days.clock_in IS NULL)
                     OR ((other.clock_in IS NULL) = (work_days.clock_in IS NULL)
                         AND other.rowid < work_days.rowid)
                  )
           );

        DELETE FROM work_days
         WHERE length(date) = 10
           AND clock_in IS NULL
           AND EXISTS (
               SELECT 1 FROM work_days AS legacy
                WHERE length(legacy.date) > 10
                  AND substr(legacy.date, 1, 10) = work_days.date
           );

        DELETE FROM work_days
         WHERE length(date) > 10
           AND EXISTS (
               SELECT 1 FROM work_days AS plain
                WHERE plain.date = substr(work_days.date, 1, 10)
           );

        UPDATE work_days
           SET date = substr(date, 1, 10)
         WHERE length(date) > 10;
        "#,
    },
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    conn.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    conn.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', ?1, ?2)",
        [m.version, m.description],
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Returns the versions applied by this call.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut applied = Vec::new();
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }
        apply(conn, m)?;
        applied.push(m.version);
    }

    Ok(applied)
}
