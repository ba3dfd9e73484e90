use crate::core::calculator::duration::{format_duration, is_inverted, worked_seconds};
use crate::models::day_record::DayRecord;
use crate::utils::time::format_hm;
use serde::Serialize;

/// Flat row used by the CSV and JSON exports.
#[derive(Serialize, Clone, Debug)]
pub struct DayRecordExport {
    pub date: String,
    pub weekday: String,
    pub clock_in: Option<String>,
    pub clock_out: Option<String>,
    pub worked_seconds: u64,
    pub worked: String,
    pub inverted: bool,
}

impl From<&DayRecord> for DayRecordExport {
    fn from(r: &DayRecord) -> Self {
        let secs = worked_seconds(r);
        Self {
            date: r.date_str(),
            weekday: r.date.format("%a").to_string(),
            clock_in: r.clock_in().map(format_hm),
            clock_out: r.clock_out().map(format_hm),
            worked_seconds: secs,
            worked: format_duration(secs),
            inverted: is_inverted(r),
        }
    }
}

pub(crate) fn to_export_rows(records: &[DayRecord]) -> Vec<DayRecordExport> {
    records.iter().map(DayRecordExport::from).collect()
}
