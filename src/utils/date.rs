//! Date utilities: parsing day keys and weekdays, resolving CLI periods into ranges.

use crate::errors::{AppError, AppResult};
use crate::models::date_range::DateRange;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Drop the time of day from an instant.
pub fn normalize_day(instant: NaiveDateTime) -> NaiveDate {
    instant.date()
}

/// Parse a stored or user-supplied date key.
///
/// Plain `YYYY-MM-DD` keys are taken as is; keys carrying a time component
/// are normalized to their calendar day.
pub fn parse_day_key(s: &str) -> AppResult<NaiveDate> {
    let s = s.trim();
    if let Some(d) = parse_date(s) {
        return Ok(d);
    }

    const WITH_TIME: [&str; 4] = [
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ];
    WITH_TIME
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(normalize_day)
        .ok_or_else(|| AppError::AmbiguousDateKey(s.to_string()))
}

/// Accepts `Mon`, `monday`, `MONDAY`, ...
pub fn parse_weekday(s: &str) -> AppResult<Weekday> {
    s.trim()
        .parse::<Weekday>()
        .map_err(|_| AppError::InvalidWeekday(s.to_string()))
}

/// Resolve a single period token into an inclusive range.
///
/// Supported: `YYYY-MM-DD`, `YYYY-MM`, `YYYY`.
pub fn range_from_period(p: &str) -> AppResult<DateRange> {
    let p = p.trim();

    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok(DateRange::single(d));
    }

    // YYYY-MM
    if let Some(first) = parse_date(&format!("{p}-01")) {
        return Ok(DateRange::new(first, last_day_of_month(first.year(), first.month())?));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
    {
        let first = NaiveDate::from_ymd_opt(year, 1, 1)
            .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
        let last = NaiveDate::from_ymd_opt(year, 12, 31)
            .ok_or_else(|| AppError::InvalidDate(p.to_string()))?;
        return Ok(DateRange::new(first, last));
    }

    Err(AppError::InvalidDate(format!("Invalid period: {}", p)))
}

/// Resolve `A:B` where both sides are period tokens; the range spans from the
/// start of `A` to the end of `B`.
pub fn range_between(start: &str, end: &str) -> AppResult<DateRange> {
    let s = range_from_period(start)?;
    let e = range_from_period(end)?;
    Ok(DateRange::new(s.first, e.last))
}

pub fn last_day_of_month(year: i32, month: u32) -> AppResult<NaiveDate> {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)
        .and_then(|d| d.pred_opt())
        .ok_or_else(|| AppError::InvalidDate(format!("{year}-{month:02}")))
}
