use crate::cli::commands::{now, open_store, seed_current_week};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::widget::WidgetLogic;
use crate::errors::AppResult;
use crate::utils::date::normalize_day;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::Widget { tap } = &cli.command {
        let first_day = cfg.first_weekday()?;
        let now = now(cli)?;

        let mut pool = open_store(cfg)?;
        seed_current_week(&mut pool, cfg, normalize_day(now))?;

        let entry = if *tap {
            WidgetLogic::tap(&mut pool, now, first_day)?
        } else {
            WidgetLogic::snapshot(&mut pool, now, first_day)?
        };

        println!("{}", entry.render());
    }
    Ok(())
}
