use crate::errors::AppError;
use crate::errors::AppResult;
use crate::models::date_range::DateRange;
use crate::models::day_record::DayRecord;
use crate::models::day_state::DayState;
use crate::utils::date::parse_day_key;
use crate::utils::time::{format_instant, parse_instant};
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_optional_instant(date_str: &str, raw: Option<String>) -> Result<Option<NaiveDateTime>> {
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => parse_instant(&s).map(Some).ok_or_else(|| {
            conversion_error(AppError::InvalidRecord(
                date_str.to_string(),
                format!("invalid instant '{}'", s),
            ))
        }),
    }
}

pub fn map_row(row: &Row) -> Result<DayRecord> {
    let date_str: String = row.get("date")?;
    let date = parse_day_key(&date_str).map_err(conversion_error)?;

    let clock_in = parse_optional_instant(&date_str, row.get("clock_in")?)?;
    let clock_out = parse_optional_instant(&date_str, row.get("clock_out")?)?;

    let state = DayState::from_columns(clock_in, clock_out).ok_or_else(|| {
        conversion_error(AppError::InvalidRecord(
            date_str.clone(),
            "clock-out recorded without clock-in".into(),
        ))
    })?;

    Ok(DayRecord { date, state })
}

fn date_key(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn state_columns(state: &DayState) -> (Option<String>, Option<String>) {
    (
        state.clock_in().map(format_instant),
        state.clock_out().map(format_instant),
    )
}

/// Load day records ordered by date, optionally limited to an inclusive range.
pub fn load_days(conn: &Connection, range: Option<&DateRange>) -> AppResult<Vec<DayRecord>> {
    let mut out = Vec::new();

    match range {
        Some(r) => {
            let mut stmt = conn.prepare(
                "SELECT date, clock_in, clock_out FROM work_days
                 WHERE date BETWEEN ?1 AND ?2
                 ORDER BY date ASC",
            )?;
            let rows = stmt.query_map(params![date_key(&r.first), date_key(&r.last)], map_row)?;
            for row in rows {
                out.push(row?);
            }
        }
        None => {
            let mut stmt = conn.prepare(
                "SELECT date, clock_in, clock_out FROM work_days
                 ORDER BY date ASC",
            )?;
            let rows = stmt.query_map([], map_row)?;
            for row in rows {
                out.push(row?);
            }
        }
    }

    Ok(out)
}

pub fn load_day(conn: &Connection, date: &NaiveDate) -> AppResult<Option<DayRecord>> {
    let mut stmt = conn.prepare(
        "SELECT date, clock_in, clock_out FROM work_days
         WHERE date = ?1",
    )?;
    Ok(stmt.query_row([date_key(date)], map_row).optional()?)
}

/// Insert an empty row for `date` unless one exists. Returns true when inserted.
pub fn insert_day_if_absent(conn: &Connection, date: &NaiveDate) -> AppResult<bool> {
    let n = conn.execute(
        "INSERT OR IGNORE INTO work_days (date, clock_in, clock_out, updated_at)
         VALUES (?1, NULL, NULL, datetime('now', 'localtime'))",
        [date_key(date)],
    )?;
    Ok(n > 0)
}

/// Write both time columns for `date`, creating the row if needed.
pub fn upsert_day_state(conn: &Connection, date: &NaiveDate, state: &DayState) -> AppResult<()> {
    let (clock_in, clock_out) = state_columns(state);
    conn.execute(
        "INSERT INTO work_days (date, clock_in, clock_out, updated_at)
         VALUES (?1, ?2, ?3, datetime('now', 'localtime'))
         ON CONFLICT(date) DO UPDATE SET
             clock_in   = excluded.clock_in,
             clock_out  = excluded.clock_out,
             updated_at = excluded.updated_at",
        params![date_key(date), clock_in, clock_out],
    )?;
    Ok(())
}
