//! hours library root.
//! Exposes the CLI parser, the high-level run() function, the weekly
//! aggregation core and the SQLite day store.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::In { .. } | Commands::Out { .. } => commands::clock::handle(cli, cfg),
        Commands::Edit { .. } => commands::edit::handle(cli, cfg),
        Commands::Del { .. } => commands::del::handle(cli, cfg),
        Commands::List { .. } => commands::list::handle(cli, cfg),
        Commands::Export { .. } => commands::export::handle(cli, cfg),
        Commands::Widget { .. } => commands::widget::handle(cli, cfg),
        Commands::Config { .. } => commands::config::handle(cli, cfg),
        Commands::Db { .. } => commands::db::handle(cli, cfg),
        Commands::Log { .. } => commands::log::handle(cli, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Config is loaded once; --db overrides the stored database path.
    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
