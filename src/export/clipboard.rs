//! System clipboard side effect for the weekly summary.

use crate::errors::{AppError, AppResult};

#[cfg(feature = "clipboard")]
pub fn copy_to_clipboard(text: &str) -> AppResult<()> {
    use copypasta::{ClipboardContext, ClipboardProvider};

    let mut ctx = ClipboardContext::new().map_err(|e| AppError::Clipboard(e.to_string()))?;
    ctx.set_contents(text.to_owned())
        .map_err(|e| AppError::Clipboard(e.to_string()))
}

#[cfg(not(feature = "clipboard"))]
pub fn copy_to_clipboard(_text: &str) -> AppResult<()> {
    Err(AppError::Clipboard(
        "this build has no clipboard support (enable the `clipboard` feature)".into(),
    ))
}
