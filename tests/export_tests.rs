use chrono::Weekday;
use hours::db::pool::DbPool;
use hours::db::store::DayStore;
use hours::errors::AppError;
use hours::export::range::parse_period;
use hours::export::{ExportFormat, ExportLogic, ExportOptions};
use hours::models::date_range::DateRange;
use hours::models::day_state::DayState;

mod common;
use common::{at, day};

fn seeded_pool() -> DbPool {
    let mut pool = DbPool::in_memory().unwrap();
    pool.save_state(
        day("2025-02-10"),
        &DayState::Closed {
            clock_in: at("2025-02-10 09:00"),
            clock_out: at("2025-02-10 18:00"),
        },
    )
    .unwrap();
    pool.save_state(
        day("2025-02-12"),
        &DayState::Open {
            clock_in: at("2025-02-12 08:30"),
        },
    )
    .unwrap();
    pool.save_state(
        day("2025-02-18"),
        &DayState::Closed {
            clock_in: at("2025-02-18 10:00"),
            clock_out: at("2025-02-18 12:00"),
        },
    )
    .unwrap();
    pool
}

fn opts(format: ExportFormat) -> ExportOptions {
    ExportOptions {
        format,
        week_of: day("2025-02-13"),
        range: None,
        file: None,
        clipboard: false,
        force: false,
    }
}

#[test]
fn test_render_text_for_week_of_date() {
    let mut pool = seeded_pool();
    let text = ExportLogic::render(&mut pool, &opts(ExportFormat::Text), Weekday::Mon).unwrap();

    assert_eq!(
        text,
        "10 - 16 February 2025\n\
         Mon => 09:00, 18:00\n\
         Tue => x, x\n\
         Wed => 08:30, x\n\
         Thu => x, x\n\
         Fri => x, x\n\
         Sat => x, x\n\
         Sun => x, x"
    );
}

#[test]
fn test_render_text_with_sunday_week_start() {
    let mut pool = seeded_pool();
    let text = ExportLogic::render(&mut pool, &opts(ExportFormat::Text), Weekday::Sun).unwrap();

    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "09 - 15 February 2025");
    assert_eq!(lines[1], "Sun => x, x");
    assert_eq!(lines[2], "Mon => 09:00, 18:00");
    assert_eq!(lines.len(), 8);
}

#[test]
fn test_render_text_for_range_emits_one_block_per_week() {
    let mut pool = seeded_pool();
    let mut o = opts(ExportFormat::Text);
    o.range = Some(DateRange::new(day("2025-02-01"), day("2025-02-28")));

    let text = ExportLogic::render(&mut pool, &o, Weekday::Mon).unwrap();
    let blocks: Vec<&str> = text.split("\n\n").collect();

    assert_eq!(blocks.len(), 2);
    assert!(blocks[0].starts_with("10 - 16 February 2025\n"));
    assert!(blocks[1].starts_with("17 - 23 February 2025\n"));
    assert!(blocks[1].contains("Tue => 10:00, 12:00"));
}

#[test]
fn test_render_text_range_starting_mid_week_keeps_whole_week() {
    let mut pool = DbPool::in_memory().unwrap();
    pool.save_state(
        day("2025-01-27"),
        &DayState::Closed {
            clock_in: at("2025-01-27 09:00"),
            clock_out: at("2025-01-27 18:00"),
        },
    )
    .unwrap();
    pool.save_state(
        day("2025-02-01"),
        &DayState::Open {
            clock_in: at("2025-02-01 10:00"),
        },
    )
    .unwrap();

    let mut o = opts(ExportFormat::Text);
    o.range = Some(DateRange::new(day("2025-02-01"), day("2025-02-28")));

    let text = ExportLogic::render(&mut pool, &o, Weekday::Mon).unwrap();
    let first_block = text.split("\n\n").next().unwrap();

    assert!(first_block.starts_with("27 January - 02 February 2025\n"));
    assert!(first_block.contains("Mon => 09:00, 18:00"));
    assert!(first_block.contains("Sat => 10:00, x"));
}

#[test]
fn test_render_csv_lists_stored_days_of_the_week() {
    let mut pool = seeded_pool();
    let csv = ExportLogic::render(&mut pool, &opts(ExportFormat::Csv), Weekday::Mon).unwrap();
    let lines: Vec<&str> = csv.lines().collect();

    assert_eq!(
        lines[0],
        "date,weekday,clock_in,clock_out,worked_seconds,worked,inverted"
    );
    assert_eq!(lines[1], "2025-02-10,Mon,09:00,18:00,32400,9h 0m,false");
    assert_eq!(lines[2], "2025-02-12,Wed,08:30,,0,0h 0m,false");
    assert_eq!(lines.len(), 3);
}

#[test]
fn test_render_json_flags_inverted_days() {
    let mut pool = DbPool::in_memory().unwrap();
    pool.save_state(
        day("2025-02-11"),
        &DayState::Closed {
            clock_in: at("2025-02-11 18:00"),
            clock_out: at("2025-02-11 09:00"),
        },
    )
    .unwrap();

    let json = ExportLogic::render(&mut pool, &opts(ExportFormat::Json), Weekday::Mon).unwrap();
    let rows: serde_json::Value = serde_json::from_str(&json).unwrap();
    let row = &rows[0];

    assert_eq!(row["date"], "2025-02-11");
    assert_eq!(row["worked_seconds"], 0);
    assert_eq!(row["inverted"], true);
}

#[test]
fn test_export_writes_file_and_forced_rerun_overwrites() {
    let mut pool = seeded_pool();
    let path = common::temp_out("export_logic", "txt");

    let mut o = opts(ExportFormat::Text);
    o.file = Some(path.clone().into());
    o.force = true;
    let payload = ExportLogic::export(&mut pool, &o, Weekday::Mon).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written, payload);

    // Second run rewrites the same file without asking.
    ExportLogic::export(&mut pool, &o, Weekday::Mon).unwrap();
    assert_eq!(std::fs::read_to_string(&path).unwrap(), payload);
}

#[test]
fn test_parse_period_variants() {
    let today = day("2025-02-13");

    assert_eq!(parse_period("all", today, Weekday::Mon).unwrap(), None);
    assert_eq!(
        parse_period("week", today, Weekday::Mon).unwrap(),
        Some(DateRange::new(day("2025-02-10"), day("2025-02-16")))
    );
    assert_eq!(
        parse_period("2025-02", today, Weekday::Mon).unwrap(),
        Some(DateRange::new(day("2025-02-01"), day("2025-02-28")))
    );
    assert_eq!(
        parse_period("2024", today, Weekday::Mon).unwrap(),
        Some(DateRange::new(day("2024-01-01"), day("2024-12-31")))
    );
    assert_eq!(
        parse_period("2025-02-13", today, Weekday::Mon).unwrap(),
        Some(DateRange::single(today))
    );
    assert_eq!(
        parse_period("2025-01:2025-02-05", today, Weekday::Mon).unwrap(),
        Some(DateRange::new(day("2025-01-01"), day("2025-02-05")))
    );
    assert!(matches!(
        parse_period("last tuesday", today, Weekday::Mon),
        Err(AppError::InvalidDate(_))
    ));
}
