//! Plain-text weekly summary, suitable for pasting into a chat or a timesheet.
//!
//! ```text
//! 10 - 16 February 2025
//! Mon => 09:00, 18:00
//! Tue => x, x
//! ...
//! ```

use crate::models::day_record::DayRecord;
use crate::utils::formatting::time_or;
use chrono::{Datelike, NaiveDate};

pub const MISSING_TIME: &str = "x";

/// Header line describing the span `start..=end`.
pub fn week_header(start: NaiveDate, end: NaiveDate) -> String {
    if start.year() != end.year() {
        format!("{} - {}", start.format("%d %B %Y"), end.format("%d %B %Y"))
    } else if start.month() != end.month() {
        format!("{} - {}", start.format("%d %B"), end.format("%d %B %Y"))
    } else {
        format!("{} - {}", start.format("%d"), end.format("%d %B %Y"))
    }
}

/// One header line plus one line per day of the week starting at
/// `week_start`. Records outside that week are ignored.
pub fn export_week_text(week_start: NaiveDate, records: &[DayRecord]) -> String {
    let days: Vec<NaiveDate> = week_start.iter_days().take(7).collect();
    let end = days.last().copied().unwrap_or(week_start);

    let mut lines = Vec::with_capacity(days.len() + 1);
    lines.push(week_header(week_start, end));

    for day in days {
        let record = records.iter().find(|r| r.date == day);
        let clock_in = record.and_then(DayRecord::clock_in);
        let clock_out = record.and_then(DayRecord::clock_out);

        lines.push(format!(
            "{} => {}, {}",
            day.format("%a"),
            time_or(clock_in, MISSING_TIME),
            time_or(clock_out, MISSING_TIME),
        ));
    }

    lines.join("\n")
}
