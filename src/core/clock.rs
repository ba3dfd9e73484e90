use crate::core::audit;
use crate::db::store::DayStore;
use crate::errors::{AppError, AppResult};
use crate::models::clock_event::ClockEventKind;
use crate::models::day_record::DayRecord;
use crate::utils::time::format_hm;
use chrono::{NaiveDate, NaiveDateTime};

/// Clock-in / clock-out use case shared by the `in`, `out` and `widget` commands.
pub struct ClockLogic;

impl ClockLogic {
    pub fn record<S: DayStore>(
        store: &mut S,
        date: NaiveDate,
        kind: ClockEventKind,
        at: NaiveDateTime,
    ) -> AppResult<DayRecord> {
        let record = store.upsert_clock_event(date, kind, at)?;

        audit(
            store,
            kind.log_operation(),
            &record.date_str(),
            &format!("Clock {} at {}", kind.as_str(), format_hm(at)),
        );

        Ok(record)
    }

    /// Perform whichever event the day expects next (in, then out).
    pub fn toggle<S: DayStore>(
        store: &mut S,
        date: NaiveDate,
        at: NaiveDateTime,
    ) -> AppResult<DayRecord> {
        let current = store.ensure_day(date)?;
        let kind = current
            .state
            .next_event()
            .ok_or_else(|| AppError::DayClosed(current.date_str()))?;
        Self::record(store, date, kind, at)
    }
}
