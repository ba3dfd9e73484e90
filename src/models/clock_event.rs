use serde::Serialize;

/// A user action recording an instant as either the start or the end of
/// the working day.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ClockEventKind {
    In,
    Out,
}

impl ClockEventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClockEventKind::In => "in",
            ClockEventKind::Out => "out",
        }
    }

    /// Operation name written to the audit log.
    pub fn log_operation(&self) -> &'static str {
        match self {
            ClockEventKind::In => "clock_in",
            ClockEventKind::Out => "clock_out",
        }
    }
}
