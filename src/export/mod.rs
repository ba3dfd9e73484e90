mod clipboard;
mod csv;
mod fs_utils;
mod json;
pub mod logic;
pub mod model;
pub mod range;

pub use clipboard::copy_to_clipboard;
pub use logic::{ExportLogic, ExportOptions};
pub use model::DayRecordExport;

use clap::ValueEnum;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Text,
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Text => "text",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
