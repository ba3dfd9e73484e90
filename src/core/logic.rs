use crate::core::calculator::duration::{inverted_days, week_total_seconds};
use crate::core::calculator::week::{WeekOrder, buckets, start_of_week};
use crate::errors::AppResult;
use crate::models::date_range::DateRange;
use crate::models::day_record::DayRecord;
use crate::models::week_bucket::WeekBucket;
use crate::models::week_summary::WeekSummary;
use chrono::{NaiveDate, Weekday};

pub struct Core;

impl Core {
    pub fn summarize(bucket: WeekBucket) -> WeekSummary {
        let total_seconds = week_total_seconds(&bucket.records);
        let inverted_days = inverted_days(&bucket.records);
        WeekSummary {
            bucket,
            total_seconds,
            inverted_days,
        }
    }

    pub fn build_week_summaries(
        records: &[DayRecord],
        first_day: Weekday,
        order: WeekOrder,
    ) -> AppResult<Vec<WeekSummary>> {
        Ok(buckets(records, first_day, order)?
            .into_iter()
            .map(Self::summarize)
            .collect())
    }

    /// The seven-day range of the week containing `date`.
    pub fn week_of(date: NaiveDate, first_day: Weekday) -> AppResult<DateRange> {
        Ok(DateRange::week(start_of_week(date, first_day)?))
    }
}
