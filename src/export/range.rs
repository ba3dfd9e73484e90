//! Period expressions shared by `list --period` and `export --range`.

use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::date_range::DateRange;
use crate::utils::date::{range_between, range_from_period};
use chrono::{NaiveDate, Weekday};

/// Parse a period expression into an inclusive range.
///
/// - `all` → `None` (no filter)
/// - `week` → the week containing `today`
/// - `YYYY`, `YYYY-MM`, `YYYY-MM-DD`
/// - `A:B` with any of the above on either side
pub fn parse_period(p: &str, today: NaiveDate, first_day: Weekday) -> AppResult<Option<DateRange>> {
    let p = p.trim();

    if p.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    if p.eq_ignore_ascii_case("week") {
        return Ok(Some(Core::week_of(today, first_day)?));
    }

    if let Some((start, end)) = p.split_once(':') {
        return Ok(Some(range_between(start, end)?));
    }

    Ok(Some(range_from_period(p)?))
}
