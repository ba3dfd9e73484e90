use crate::cli::commands::{date_or_today, now, open_store};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::range::parse_period;
use crate::export::{ExportLogic, ExportOptions};
use crate::utils::date::normalize_day;
use crate::utils::path::expand_tilde;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        week,
        range,
        file,
        clipboard,
        force,
    } = &cli.command
    {
        let first_day = cfg.first_weekday()?;
        let now = now(cli)?;

        let range = match range {
            Some(r) => parse_period(r, normalize_day(now), first_day)?,
            None => None,
        };

        let opts = ExportOptions {
            format: *format,
            week_of: date_or_today(week.as_ref(), now)?,
            range,
            file: file.as_deref().map(expand_tilde),
            clipboard: *clipboard,
            force: *force,
        };

        let mut pool = open_store(cfg)?;
        ExportLogic::export(&mut pool, &opts, first_day)?;
    }
    Ok(())
}
