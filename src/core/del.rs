use crate::core::audit;
use crate::db::store::DayStore;
use crate::errors::AppResult;
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Reset a day to the empty state. The day row itself stays.
    pub fn apply<S: DayStore>(store: &mut S, date: NaiveDate) -> AppResult<()> {
        let record = store.clear_day(date)?;
        audit(store, "del", &record.date_str(), "Cleared clock-in and clock-out");
        Ok(())
    }
}
