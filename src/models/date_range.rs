use chrono::{Days, NaiveDate};

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl DateRange {
    /// Builds a range, swapping the bounds when given in reverse order.
    pub fn new(a: NaiveDate, b: NaiveDate) -> Self {
        if a <= b {
            Self { first: a, last: b }
        } else {
            Self { first: b, last: a }
        }
    }

    pub fn single(date: NaiveDate) -> Self {
        Self {
            first: date,
            last: date,
        }
    }

    /// Seven days starting at `week_start`, clipped at the last representable date.
    pub fn week(week_start: NaiveDate) -> Self {
        let last = week_start
            .checked_add_days(Days::new(6))
            .unwrap_or(NaiveDate::MAX);
        Self {
            first: week_start,
            last,
        }
    }

    pub fn days(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.first.iter_days().take_while(move |d| *d <= self.last)
    }
}
