//! Time utilities: parsing HH:MM and stored instants, resolving "now".

use crate::errors::{AppError, AppResult};
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Storage format for clock instants.
pub const INSTANT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<NaiveTime>> {
    if let Some(s) = input {
        let t = parse_time(s).ok_or_else(|| AppError::InvalidTime(s.to_string()))?;
        Ok(Some(t))
    } else {
        Ok(None)
    }
}

/// 24-hour `HH:MM`.
pub fn format_hm(instant: NaiveDateTime) -> String {
    instant.format("%H:%M").to_string()
}

pub fn format_instant(instant: NaiveDateTime) -> String {
    instant.format(INSTANT_FORMAT).to_string()
}

pub fn parse_instant(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    [INSTANT_FORMAT, "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
}

/// Current local wall-clock time, truncated to whole seconds.
pub fn now() -> NaiveDateTime {
    let n = Local::now().naive_local();
    n.with_nanosecond(0).unwrap_or(n)
}

/// Use an explicit `YYYY-MM-DD HH:MM[:SS]` override when given, else the clock.
pub fn resolve_now(over: Option<&str>) -> AppResult<NaiveDateTime> {
    match over {
        Some(s) => parse_instant(s).ok_or_else(|| AppError::InvalidTime(s.to_string())),
        None => Ok(now()),
    }
}

/// The instant of a clock event: `date` at `at` when a time is given,
/// otherwise `now` itself.
pub fn event_instant(date: NaiveDate, at: Option<NaiveTime>, now: NaiveDateTime) -> NaiveDateTime {
    match at {
        Some(t) => date.and_time(t),
        None => now,
    }
}
