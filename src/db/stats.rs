use crate::core::calculator::duration::{format_duration, week_total_seconds};
use crate::db::pool::DbPool;
use crate::db::store::DayStore;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) DAYS
    //
    let records = pool.fetch_records(None)?;
    let closed = records.iter().filter(|r| r.state.is_closed()).count();
    let open = records.iter().filter(|r| r.state.is_open()).count();

    println!(
        "{}• Days stored:{} {}{}{} ({} closed, {} open)",
        CYAN,
        RESET,
        GREEN,
        records.len(),
        RESET,
        closed,
        open
    );

    //
    // 3) DATE RANGE
    //
    let fmt_first = records
        .first()
        .map(|r| r.date_str())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));
    let fmt_last = records
        .last()
        .map(|r| r.date_str())
        .unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt_first);
    println!("    to:   {}", fmt_last);

    //
    // 4) TOTAL WORKED
    //
    println!(
        "{}• Total worked:{} {}",
        CYAN,
        RESET,
        format_duration(week_total_seconds(&records))
    );

    println!();
    Ok(())
}
