use crate::core::audit;
use crate::db::store::DayStore;
use crate::errors::AppResult;
use crate::models::day_record::DayRecord;
use crate::models::day_state::DayState;
use crate::utils::time::format_hm;
use chrono::{NaiveDate, NaiveTime};

/// Manual correction of a day's times.
pub struct EditLogic;

impl EditLogic {
    /// Close `date` with the given times. A missing time falls back to the
    /// stored one, then to `defaults` (clock-in, clock-out).
    ///
    /// An inverted interval is saved as entered; aggregation counts it as zero.
    pub fn apply<S: DayStore>(
        store: &mut S,
        date: NaiveDate,
        clock_in: Option<NaiveTime>,
        clock_out: Option<NaiveTime>,
        defaults: (NaiveTime, NaiveTime),
    ) -> AppResult<DayRecord> {
        let existing = store.fetch_day(date)?;
        let stored_in = existing.as_ref().and_then(DayRecord::clock_in);
        let stored_out = existing.as_ref().and_then(DayRecord::clock_out);

        let new_in = clock_in
            .map(|t| date.and_time(t))
            .or(stored_in)
            .unwrap_or_else(|| date.and_time(defaults.0));
        let new_out = clock_out
            .map(|t| date.and_time(t))
            .or(stored_out)
            .unwrap_or_else(|| date.and_time(defaults.1));

        let record = store.save_state(
            date,
            &DayState::Closed {
                clock_in: new_in,
                clock_out: new_out,
            },
        )?;

        audit(
            store,
            "edit",
            &record.date_str(),
            &format!("Set {} - {}", format_hm(new_in), format_hm(new_out)),
        );

        Ok(record)
    }
}
