use super::week_bucket::WeekBucket;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct WeekSummary {
    pub bucket: WeekBucket,
    pub total_seconds: u64,
    /// Days whose clock-out precedes their clock-in; counted as zero.
    pub inverted_days: Vec<NaiveDate>,
}
