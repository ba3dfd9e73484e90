//! Week bucketing: resolve a day to the first day of its week and group
//! records into week buckets.

use crate::errors::{AppError, AppResult};
use crate::models::day_record::DayRecord;
use crate::models::week_bucket::WeekBucket;
use chrono::{Datelike, Days, NaiveDate, Weekday};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Presentation order of week buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
pub enum WeekOrder {
    #[default]
    #[serde(rename = "asc")]
    #[value(name = "asc")]
    Ascending,
    #[serde(rename = "desc")]
    #[value(name = "desc")]
    Descending,
}

/// Date of the first day of the week containing `date`.
///
/// Only the calendar date takes part: callers normalize instants to a day
/// before calling, so Sunday 23:59 and Monday 00:00 land in different weeks.
pub fn start_of_week(date: NaiveDate, first_day: Weekday) -> AppResult<NaiveDate> {
    let offset = (7 + date.weekday().num_days_from_monday() - first_day.num_days_from_monday()) % 7;
    date.checked_sub_days(Days::new(u64::from(offset)))
        .ok_or_else(|| AppError::AmbiguousDateKey(date.format("%Y-%m-%d").to_string()))
}

/// ISO week key, e.g. `W07 2025`.
pub fn iso_week_label(date: NaiveDate) -> String {
    let w = date.iso_week();
    format!("W{:02} {}", w.week(), w.year())
}

/// Group records by the start of their week; each bucket is sorted by date.
pub fn group_by_week(
    records: &[DayRecord],
    first_day: Weekday,
) -> AppResult<BTreeMap<NaiveDate, Vec<DayRecord>>> {
    let mut groups: BTreeMap<NaiveDate, Vec<DayRecord>> = BTreeMap::new();

    for r in records {
        let key = start_of_week(r.date, first_day)?;
        groups.entry(key).or_default().push(r.clone());
    }

    for bucket in groups.values_mut() {
        bucket.sort_by_key(|r| r.date);
    }

    Ok(groups)
}

pub fn buckets(
    records: &[DayRecord],
    first_day: Weekday,
    order: WeekOrder,
) -> AppResult<Vec<WeekBucket>> {
    let groups = group_by_week(records, first_day)?;

    let mut out: Vec<WeekBucket> = groups
        .into_iter()
        .map(|(week_start, records)| WeekBucket {
            week_start,
            records,
        })
        .collect();

    if order == WeekOrder::Descending {
        out.reverse();
    }

    Ok(out)
}
