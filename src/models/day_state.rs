//! Three-state lifecycle of a single working day.
//!
//! ```text
//! Empty --in--> Open --out--> Closed
//!   ^                           |
//!   +----------- reset ---------+
//! ```
//!
//! There is no clock transition out of `Closed`; only a reset (delete) or a
//! manual edit changes a closed day.

use crate::errors::{AppError, AppResult};
use crate::models::clock_event::ClockEventKind;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(tag = "state", rename_all = "lowercase")]
pub enum DayState {
    #[default]
    Empty,
    Open {
        clock_in: NaiveDateTime,
    },
    Closed {
        clock_in: NaiveDateTime,
        clock_out: NaiveDateTime,
    },
}

impl DayState {
    /// Rebuild the state from the two nullable store columns.
    /// Returns `None` for a clock-out without a clock-in.
    pub fn from_columns(
        clock_in: Option<NaiveDateTime>,
        clock_out: Option<NaiveDateTime>,
    ) -> Option<Self> {
        match (clock_in, clock_out) {
            (None, None) => Some(DayState::Empty),
            (Some(clock_in), None) => Some(DayState::Open { clock_in }),
            (Some(clock_in), Some(clock_out)) => Some(DayState::Closed {
                clock_in,
                clock_out,
            }),
            (None, Some(_)) => None,
        }
    }

    pub fn clock_in(&self) -> Option<NaiveDateTime> {
        match self {
            DayState::Empty => None,
            DayState::Open { clock_in } | DayState::Closed { clock_in, .. } => Some(*clock_in),
        }
    }

    pub fn clock_out(&self) -> Option<NaiveDateTime> {
        match self {
            DayState::Closed { clock_out, .. } => Some(*clock_out),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, DayState::Empty)
    }

    pub fn is_open(&self) -> bool {
        matches!(self, DayState::Open { .. })
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, DayState::Closed { .. })
    }

    /// The clock action a single-button control should perform next.
    /// `None` means the control must be disabled.
    pub fn next_event(&self) -> Option<ClockEventKind> {
        match self {
            DayState::Empty => Some(ClockEventKind::In),
            DayState::Open { .. } => Some(ClockEventKind::Out),
            DayState::Closed { .. } => None,
        }
    }

    /// Apply a clock event recorded at `at` for the day `date`.
    pub fn apply(
        &self,
        date: NaiveDate,
        kind: ClockEventKind,
        at: NaiveDateTime,
    ) -> AppResult<DayState> {
        let day = date.format("%Y-%m-%d").to_string();
        match (self, kind) {
            (DayState::Empty, ClockEventKind::In) => Ok(DayState::Open { clock_in: at }),
            (DayState::Empty, ClockEventKind::Out) => Err(AppError::NotClockedIn(day)),
            (DayState::Open { .. }, ClockEventKind::In) => Err(AppError::AlreadyClockedIn(day)),
            (DayState::Open { clock_in }, ClockEventKind::Out) => Ok(DayState::Closed {
                clock_in: *clock_in,
                clock_out: at,
            }),
            (DayState::Closed { .. }, _) => Err(AppError::DayClosed(day)),
        }
    }

    pub fn reset(&self) -> DayState {
        DayState::Empty
    }
}
