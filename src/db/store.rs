//! Day-record store contract and its SQLite implementation.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::clock_event::ClockEventKind;
use crate::models::date_range::DateRange;
use crate::models::day_record::DayRecord;
use crate::models::day_state::DayState;
use chrono::{NaiveDate, NaiveDateTime};

/// CRUD over day records. At most one record exists per calendar date.
pub trait DayStore {
    /// Records ordered by date, optionally limited to `range`.
    fn fetch_records(&mut self, range: Option<DateRange>) -> AppResult<Vec<DayRecord>>;

    fn fetch_day(&mut self, date: NaiveDate) -> AppResult<Option<DayRecord>>;

    /// Create an empty record for `date` if absent and return the stored record.
    fn ensure_day(&mut self, date: NaiveDate) -> AppResult<DayRecord>;

    /// Overwrite the times of `date`, creating the record if absent.
    fn save_state(&mut self, date: NaiveDate, state: &DayState) -> AppResult<DayRecord>;

    /// Record a clock event for `date`, creating the record if absent.
    fn upsert_clock_event(
        &mut self,
        date: NaiveDate,
        kind: ClockEventKind,
        at: NaiveDateTime,
    ) -> AppResult<DayRecord> {
        let current = self.ensure_day(date)?;
        let next = current.state.apply(date, kind, at)?;
        self.save_state(date, &next)
    }

    /// Reset `date` to the empty state, keeping the record.
    fn clear_day(&mut self, date: NaiveDate) -> AppResult<DayRecord> {
        let current = self
            .fetch_day(date)?
            .ok_or_else(|| AppError::NoRecordForDate(date.format("%Y-%m-%d").to_string()))?;
        self.save_state(date, &current.state.reset())
    }

    /// Append an entry to the audit trail, if the store keeps one.
    fn audit(&mut self, _operation: &str, _target: &str, _message: &str) -> AppResult<()> {
        Ok(())
    }

    /// Make sure every day of the week starting at `week_start` has a record.
    fn ensure_week(&mut self, week_start: NaiveDate) -> AppResult<Vec<DayRecord>> {
        let range = DateRange::week(week_start);
        range.days().map(|d| self.ensure_day(d)).collect()
    }
}

impl DayStore for DbPool {
    fn fetch_records(&mut self, range: Option<DateRange>) -> AppResult<Vec<DayRecord>> {
        queries::load_days(&self.conn, range.as_ref())
    }

    fn fetch_day(&mut self, date: NaiveDate) -> AppResult<Option<DayRecord>> {
        queries::load_day(&self.conn, &date)
    }

    fn ensure_day(&mut self, date: NaiveDate) -> AppResult<DayRecord> {
        queries::insert_day_if_absent(&self.conn, &date)?;
        queries::load_day(&self.conn, &date)?
            .ok_or_else(|| AppError::NoRecordForDate(date.to_string()))
    }

    fn save_state(&mut self, date: NaiveDate, state: &DayState) -> AppResult<DayRecord> {
        queries::upsert_day_state(&self.conn, &date, state)?;
        Ok(DayRecord::new(date, *state))
    }

    fn audit(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        ttlog(&self.conn, operation, target, message)
    }
}
