use crate::cli::commands::{now, open_store, seed_current_week};
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::calculator::duration::{format_duration, is_inverted, worked_seconds};
use crate::core::calculator::week::iso_week_label;
use crate::core::logic::Core;
use crate::db::store::DayStore;
use crate::errors::AppResult;
use crate::export::range::parse_period;
use crate::models::week_summary::WeekSummary;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{colorize_in_out, colorize_optional};
use crate::utils::date::normalize_day;
use crate::utils::formatting::{bold, time_or};
use crate::utils::table::{Column, Table};

pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    if let Commands::List { period, order } = &cli.command {
        let first_day = cfg.first_weekday()?;
        let today = normalize_day(now(cli)?);

        let mut pool = open_store(cfg)?;
        seed_current_week(&mut pool, cfg, today)?;

        let range = match period {
            Some(p) => parse_period(p, today, first_day)?,
            None => None,
        };

        let records = pool.fetch_records(range)?;
        if records.is_empty() {
            info("No days recorded for the selected period.");
            return Ok(());
        }

        let order = order.unwrap_or(cfg.week_order);
        let summaries = Core::build_week_summaries(&records, first_day, order)?;

        for summary in &summaries {
            print_week(summary);
        }
    }
    Ok(())
}

fn print_week(summary: &WeekSummary) {
    let bucket = &summary.bucket;

    println!();
    header(format!(
        "Week: {} ({})  {}",
        bucket.week_start.format("%d %b %Y"),
        iso_week_label(bucket.week_start),
        bold(&format_duration(summary.total_seconds))
    ));

    let mut table = Table::new(vec![
        Column::new("Date", 12),
        Column::new("Day", 4),
        Column::new("In", 6),
        Column::new("Out", 6),
        Column::new("Worked", 10),
    ]);

    for r in &bucket.records {
        let worked = if r.state.is_closed() {
            let mut w = format_duration(worked_seconds(r));
            if is_inverted(r) {
                w.push_str(" !");
            }
            w
        } else {
            "-".to_string()
        };

        table.add_row(vec![
            r.date.format("%d %b %Y").to_string(),
            r.date.format("%a").to_string(),
            colorize_in_out(&time_or(r.clock_in(), "-"), true),
            colorize_in_out(&time_or(r.clock_out(), "-"), false),
            colorize_optional(&worked),
        ]);
    }

    print!("{}", table.render());

    for d in &summary.inverted_days {
        warning(format!(
            "{}: clock-out precedes clock-in, counted as 0h 0m.",
            d.format("%Y-%m-%d")
        ));
    }
}
