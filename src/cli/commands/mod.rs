pub mod clock;
pub mod config;
pub mod db;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod log;
pub mod widget;

use crate::cli::parser::Cli;
use crate::config::Config;
use crate::core::calculator::week::start_of_week;
use crate::db::pool::DbPool;
use crate::db::store::DayStore;
use crate::errors::{AppError, AppResult};
use crate::utils::date::{normalize_day, parse_date};
use crate::utils::path::expand_tilde;
use crate::utils::time::resolve_now;
use chrono::{NaiveDate, NaiveDateTime};

/// Open the configured database, applying pending migrations.
pub(crate) fn open_store(cfg: &Config) -> AppResult<DbPool> {
    let path = expand_tilde(&cfg.database);
    DbPool::open(&path.to_string_lossy())
}

pub(crate) fn now(cli: &Cli) -> AppResult<NaiveDateTime> {
    resolve_now(cli.now.as_deref())
}

/// Explicit `YYYY-MM-DD`, or the day of `now`.
pub(crate) fn date_or_today(date: Option<&String>, now: NaiveDateTime) -> AppResult<NaiveDate> {
    match date {
        Some(s) => parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string())),
        None => Ok(normalize_day(now)),
    }
}

/// Pre-create the seven rows of the current week when enabled in the config.
pub(crate) fn seed_current_week(store: &mut DbPool, cfg: &Config, today: NaiveDate) -> AppResult<()> {
    if cfg.seed_current_week {
        let start = start_of_week(today, cfg.first_weekday()?)?;
        store.ensure_week(start)?;
    }
    Ok(())
}
