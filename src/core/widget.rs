//! Home-screen style panel: today's clock state, one action button and the
//! running week total.

use crate::core::calculator::duration::{elapsed_seconds, format_duration, week_total_seconds};
use crate::core::clock::ClockLogic;
use crate::core::logic::Core;
use crate::db::store::DayStore;
use crate::errors::AppResult;
use crate::models::day_state::DayState;
use crate::utils::date::normalize_day;
use crate::utils::formatting::time_or;
use chrono::{NaiveDateTime, Weekday};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WidgetButton {
    ClockIn,
    ClockOut,
    Done,
}

impl WidgetButton {
    pub fn title(&self) -> &'static str {
        match self {
            WidgetButton::ClockIn => "Clock In",
            WidgetButton::ClockOut => "Clock Out",
            WidgetButton::Done => "Done",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WidgetEntry {
    pub now: NaiveDateTime,
    pub today: DayState,
    pub week_total: u64,
}

impl WidgetEntry {
    pub fn placeholder(now: NaiveDateTime) -> Self {
        Self {
            now,
            today: DayState::Empty,
            week_total: 0,
        }
    }

    pub fn button(&self) -> WidgetButton {
        match self.today {
            DayState::Empty => WidgetButton::ClockIn,
            DayState::Open { .. } => WidgetButton::ClockOut,
            DayState::Closed { .. } => WidgetButton::Done,
        }
    }

    /// Once the day is closed the button no longer does anything.
    pub fn button_disabled(&self) -> bool {
        self.today.next_event().is_none()
    }

    /// Time since clock-in while the day is still open.
    pub fn elapsed(&self) -> Option<u64> {
        match self.today {
            DayState::Open { clock_in } => Some(elapsed_seconds(clock_in, self.now)),
            _ => None,
        }
    }

    pub fn render(&self) -> String {
        let mut lines = Vec::new();
        lines.push(format!("Today:   {}", self.now.format("%a %d %b %Y")));
        lines.push(format!("In:      {}", time_or(self.today.clock_in(), "-")));

        match (self.today.clock_out(), self.elapsed()) {
            (Some(out), _) => lines.push(format!("Out:     {}", time_or(Some(out), "-"))),
            (None, Some(secs)) => lines.push(format!("Elapsed: {}", format_duration(secs))),
            (None, None) => lines.push("Elapsed: -".to_string()),
        }

        let button = self.button().title();
        if self.button_disabled() {
            lines.push(format!("({})", button));
        } else {
            lines.push(format!("[ {} ]", button));
        }

        lines.push(format!("Week:    {}", format_duration(self.week_total)));
        lines.join("\n")
    }
}

pub struct WidgetLogic;

impl WidgetLogic {
    pub fn snapshot<S: DayStore>(
        store: &mut S,
        now: NaiveDateTime,
        first_day: Weekday,
    ) -> AppResult<WidgetEntry> {
        let today = normalize_day(now);
        let state = store
            .fetch_day(today)?
            .map(|r| r.state)
            .unwrap_or_default();

        let week = Core::week_of(today, first_day)?;
        let records = store.fetch_records(Some(week))?;

        Ok(WidgetEntry {
            now,
            today: state,
            week_total: week_total_seconds(&records),
        })
    }

    /// Button press: clock in or out for today, then rebuild the entry.
    pub fn tap<S: DayStore>(
        store: &mut S,
        now: NaiveDateTime,
        first_day: Weekday,
    ) -> AppResult<WidgetEntry> {
        ClockLogic::toggle(store, normalize_day(now), now)?;
        Self::snapshot(store, now, first_day)
    }
}
