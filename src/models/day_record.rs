use super::day_state::DayState;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

/// One calendar day's clock-in/clock-out data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayRecord {
    pub date: NaiveDate,   // ⇔ work_days.date (TEXT "YYYY-MM-DD")
    #[serde(flatten)]
    pub state: DayState,   // ⇔ work_days.clock_in / clock_out
}

impl DayRecord {
    pub fn new(date: NaiveDate, state: DayState) -> Self {
        Self { date, state }
    }

    pub fn empty(date: NaiveDate) -> Self {
        Self::new(date, DayState::Empty)
    }

    /// Convenience constructor for a closed day.
    pub fn closed(date: NaiveDate, clock_in: NaiveDateTime, clock_out: NaiveDateTime) -> Self {
        Self::new(
            date,
            DayState::Closed {
                clock_in,
                clock_out,
            },
        )
    }

    pub fn clock_in(&self) -> Option<NaiveDateTime> {
        self.state.clock_in()
    }

    pub fn clock_out(&self) -> Option<NaiveDateTime> {
        self.state.clock_out()
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
