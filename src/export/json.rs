use crate::errors::AppResult;
use crate::export::model::DayRecordExport;

pub fn to_json(rows: &[DayRecordExport]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}
