use crate::cli::commands::{date_or_today, now, open_store};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::calculator::duration::{format_duration, worked_seconds};
use crate::core::clock::ClockLogic;
use crate::errors::AppResult;
use crate::models::clock_event::ClockEventKind;
use crate::ui::messages::{success, warning};
use crate::utils::time::{event_instant, format_hm, parse_optional_time};

/// Handle `in` and `out`.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let (kind, date, at) = match &cli.command {
        Commands::In { date, at } => (ClockEventKind::In, date, at),
        Commands::Out { date, at } => (ClockEventKind::Out, date, at),
        _ => return Ok(()),
    };

    let now = now(cli)?;
    let day = date_or_today(date.as_ref(), now)?;
    let time = parse_optional_time(at.as_ref())?;
    let instant = event_instant(day, time, now);

    let mut pool = open_store(cfg)?;
    let record = ClockLogic::record(&mut pool, day, kind, instant)?;

    match kind {
        ClockEventKind::In => success(format!("Clocked in on {} at {}", day, format_hm(instant))),
        ClockEventKind::Out => {
            success(format!(
                "Clocked out on {} at {} (worked {})",
                day,
                format_hm(instant),
                format_duration(worked_seconds(&record))
            ));
            if record.clock_in().is_some_and(|t| instant < t) {
                warning("Clock-out precedes clock-in: this day counts as 0h 0m.");
            }
        }
    }

    Ok(())
}
