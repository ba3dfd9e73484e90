use crate::cli::commands::open_store;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::calculator::duration::{format_duration, is_inverted, worked_seconds};
use crate::core::edit::EditLogic;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use crate::utils::date;
use crate::utils::formatting::time_or;
use crate::utils::time::parse_optional_time;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit { date, start, end } = &cli.command {
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let start = parse_optional_time(start.as_ref())?;
        let end = parse_optional_time(end.as_ref())?;

        let mut pool = open_store(cfg)?;
        let record = EditLogic::apply(&mut pool, d, start, end, cfg.default_times()?)?;

        success(format!(
            "{} => {}, {} ({})",
            record.date_str(),
            time_or(record.clock_in(), "-"),
            time_or(record.clock_out(), "-"),
            format_duration(worked_seconds(&record))
        ));

        if is_inverted(&record) {
            warning("Clock-out precedes clock-in: this day counts as 0h 0m.");
        }
    }

    Ok(())
}
