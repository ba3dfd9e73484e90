//! Worked-time arithmetic.
//!
//! A day counts only once closed. A closed day whose clock-out precedes its
//! clock-in counts as zero and is reported through [`inverted_days`].

use crate::models::day_record::DayRecord;
use crate::models::day_state::DayState;
use chrono::{NaiveDate, NaiveDateTime};

/// Worked seconds for a single day, never negative.
pub fn worked_seconds(record: &DayRecord) -> u64 {
    match record.state {
        DayState::Closed {
            clock_in,
            clock_out,
        } => elapsed_seconds(clock_in, clock_out),
        _ => 0,
    }
}

pub fn is_inverted(record: &DayRecord) -> bool {
    matches!(
        record.state,
        DayState::Closed { clock_in, clock_out } if clock_out < clock_in
    )
}

pub fn inverted_days(records: &[DayRecord]) -> Vec<NaiveDate> {
    records
        .iter()
        .filter(|r| is_inverted(r))
        .map(|r| r.date)
        .collect()
}

pub fn week_total_seconds(records: &[DayRecord]) -> u64 {
    records.iter().map(worked_seconds).sum()
}

/// Seconds from `since` to `until`, clamped at zero.
pub fn elapsed_seconds(since: NaiveDateTime, until: NaiveDateTime) -> u64 {
    u64::try_from((until - since).num_seconds()).unwrap_or(0)
}

/// `"{H}h {M}m"`, truncating leftover seconds.
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    format!("{}h {}m", hours, minutes)
}
