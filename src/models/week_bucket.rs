use super::day_record::DayRecord;
use chrono::NaiveDate;

/// The records whose dates fall within one week, ordered by date.
/// Derived on every read, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekBucket {
    pub week_start: NaiveDate,
    pub records: Vec<DayRecord>,
}
