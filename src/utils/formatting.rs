//! Formatting utilities used for CLI and export outputs.

use chrono::NaiveDateTime;

use crate::utils::time::format_hm;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// `HH:MM` for a present instant, `placeholder` otherwise.
pub fn time_or(instant: Option<NaiveDateTime>, placeholder: &str) -> String {
    instant.map(format_hm).unwrap_or_else(|| placeholder.to_string())
}
