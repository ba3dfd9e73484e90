pub mod calculator;
pub mod clock;
pub mod config;
pub mod del;
pub mod edit;
pub mod log;
pub mod logic;
pub mod widget;

use crate::db::store::DayStore;
use crate::ui::messages::warning;

/// Write an audit line; a failing audit never aborts the operation it describes.
pub(crate) fn audit<S: DayStore>(store: &mut S, operation: &str, target: &str, message: &str) {
    if let Err(e) = store.audit(operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}
