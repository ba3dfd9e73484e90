use crate::errors::{AppError, AppResult};
use crate::export::model::DayRecordExport;

/// Render the rows as CSV with a header line.
pub fn to_csv(rows: &[DayRecordExport]) -> AppResult<String> {
    let mut wtr = csv::Writer::from_writer(Vec::new());
    for row in rows {
        wtr.serialize(row)?;
    }
    let bytes = wtr.into_inner().map_err(|e| AppError::Export(e.to_string()))?;
    String::from_utf8(bytes).map_err(|e| AppError::Export(e.to_string()))
}
