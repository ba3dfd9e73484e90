use crate::cli::commands::open_store;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::errors::AppResult;

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if matches!(cli.command, Commands::Log { print: true }) {
        let mut pool = open_store(cfg)?;
        LogLogic::print_log(&mut pool)?;
    }

    Ok(())
}
