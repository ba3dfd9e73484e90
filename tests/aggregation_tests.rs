use chrono::{Datelike, Days, NaiveDate, Weekday};
use hours::core::calculator::duration::{
    format_duration, inverted_days, is_inverted, week_total_seconds, worked_seconds,
};
use hours::core::calculator::summary::{export_week_text, week_header};
use hours::core::calculator::week::{
    WeekOrder, buckets, group_by_week, iso_week_label, start_of_week,
};
use hours::core::logic::Core;
use hours::errors::AppError;
use hours::models::day_record::DayRecord;
use hours::models::day_state::DayState;
use hours::utils::date::{normalize_day, parse_day_key};

mod common;
use common::{at, day};

fn closed(date: &str, from: &str, to: &str) -> DayRecord {
    DayRecord::closed(
        day(date),
        at(&format!("{date} {from}")),
        at(&format!("{date} {to}")),
    )
}

/// Mon 09:00–18:00, Tue empty, Wed 09:00–17:30 in the week of 2025-02-10.
fn sample_week() -> Vec<DayRecord> {
    vec![
        closed("2025-02-10", "09:00", "18:00"),
        DayRecord::empty(day("2025-02-11")),
        closed("2025-02-12", "09:00", "17:30"),
    ]
}

#[test]
fn test_start_of_week_is_monday_for_every_day_of_the_week() {
    let monday = day("2025-02-10");
    for offset in 0..7 {
        let d = monday + Days::new(offset);
        assert_eq!(start_of_week(d, Weekday::Mon).unwrap(), monday, "for {d}");
    }
    assert_eq!(
        start_of_week(day("2025-02-17"), Weekday::Mon).unwrap(),
        day("2025-02-17")
    );
}

#[test]
fn test_start_of_week_with_sunday_start() {
    assert_eq!(
        start_of_week(day("2025-02-12"), Weekday::Sun).unwrap(),
        day("2025-02-09")
    );
    assert_eq!(
        start_of_week(day("2025-02-09"), Weekday::Sun).unwrap(),
        day("2025-02-09")
    );
}

#[test]
fn test_start_of_week_across_year_boundary() {
    assert_eq!(
        start_of_week(day("2026-01-01"), Weekday::Mon).unwrap(),
        day("2025-12-29")
    );
}

#[test]
fn test_monday_midnight_buckets_into_its_own_week() {
    let sunday_late = normalize_day(at("2025-02-09 23:59"));
    let monday_early = normalize_day(at("2025-02-10 00:00"));

    assert_eq!(
        start_of_week(monday_early, Weekday::Mon).unwrap(),
        day("2025-02-10")
    );
    assert_eq!(
        start_of_week(sunday_late, Weekday::Mon).unwrap(),
        day("2025-02-03")
    );
}

#[test]
fn test_start_of_week_before_earliest_date_fails() {
    let first = NaiveDate::MIN;
    // A week starting the day after MIN's weekday begins six days before MIN.
    let result = start_of_week(first, first.weekday().succ());
    assert!(matches!(result, Err(AppError::AmbiguousDateKey(_))));
}

#[test]
fn test_parse_day_key_normalizes_time_component() {
    assert_eq!(parse_day_key("2025-02-10").unwrap(), day("2025-02-10"));
    assert_eq!(
        parse_day_key("2025-02-10 23:59:59").unwrap(),
        day("2025-02-10")
    );
    assert_eq!(parse_day_key("2025-02-10T00:00").unwrap(), day("2025-02-10"));
    assert!(matches!(
        parse_day_key("10/02/2025"),
        Err(AppError::AmbiguousDateKey(_))
    ));
}

#[test]
fn test_group_by_week_partitions_records() {
    let start = day("2025-01-20");
    let records: Vec<DayRecord> = (0..40)
        .rev()
        .map(|i| DayRecord::empty(start + Days::new(i)))
        .collect();

    let groups = group_by_week(&records, Weekday::Mon).unwrap();

    let total: usize = groups.values().map(Vec::len).sum();
    assert_eq!(total, records.len());

    for r in &records {
        let holders: Vec<_> = groups
            .iter()
            .filter(|(_, rs)| rs.iter().any(|x| x.date == r.date))
            .map(|(k, _)| *k)
            .collect();
        assert_eq!(holders, vec![start_of_week(r.date, Weekday::Mon).unwrap()]);
    }

    for rs in groups.values() {
        assert!(rs.windows(2).all(|w| w[0].date < w[1].date));
    }
}

#[test]
fn test_buckets_follow_requested_order() {
    let records = vec![
        DayRecord::empty(day("2025-02-20")),
        DayRecord::empty(day("2025-02-03")),
        DayRecord::empty(day("2025-02-12")),
    ];

    let asc: Vec<_> = buckets(&records, Weekday::Mon, WeekOrder::Ascending)
        .unwrap()
        .into_iter()
        .map(|b| b.week_start)
        .collect();
    assert_eq!(
        asc,
        vec![day("2025-02-03"), day("2025-02-10"), day("2025-02-17")]
    );

    let desc: Vec<_> = buckets(&records, Weekday::Mon, WeekOrder::Descending)
        .unwrap()
        .into_iter()
        .map(|b| b.week_start)
        .collect();
    assert_eq!(
        desc,
        vec![day("2025-02-17"), day("2025-02-10"), day("2025-02-03")]
    );
}

#[test]
fn test_format_duration_truncates() {
    assert_eq!(format_duration(0), "0h 0m");
    assert_eq!(format_duration(59), "0h 0m");
    assert_eq!(format_duration(3661), "1h 1m");
    assert_eq!(format_duration(86399), "23h 59m");
    assert_eq!(format_duration(63000), "17h 30m");
}

#[test]
fn test_worked_seconds_for_closed_day() {
    let wed = closed("2025-02-12", "09:00", "18:00");
    assert_eq!(worked_seconds(&wed), 32400);
    assert_eq!(format_duration(week_total_seconds(&[wed])), "9h 0m");
}

#[test]
fn test_open_and_empty_days_count_zero() {
    let open = DayRecord::new(
        day("2025-02-12"),
        DayState::Open {
            clock_in: at("2025-02-12 09:00"),
        },
    );
    assert_eq!(worked_seconds(&open), 0);
    assert_eq!(worked_seconds(&DayRecord::empty(day("2025-02-13"))), 0);
}

#[test]
fn test_inverted_interval_is_clamped_and_flagged() {
    let inverted = closed("2025-02-11", "18:00", "09:00");
    let mut records = sample_week();
    records.push(inverted.clone());

    assert!(is_inverted(&inverted));
    assert_eq!(worked_seconds(&inverted), 0);
    assert_eq!(week_total_seconds(&records), 63000);
    assert_eq!(inverted_days(&records), vec![day("2025-02-11")]);
}

#[test]
fn test_week_total_equals_sum_of_days() {
    let records = sample_week();
    let sum: u64 = records.iter().map(worked_seconds).sum();
    assert_eq!(week_total_seconds(&records), sum);
    assert_eq!(format_duration(sum), "17h 30m");
}

#[test]
fn test_export_week_text_scenario() {
    let text = export_week_text(day("2025-02-10"), &sample_week());
    let expected = "10 - 16 February 2025\n\
                    Mon => 09:00, 18:00\n\
                    Tue => x, x\n\
                    Wed => 09:00, 17:30\n\
                    Thu => x, x\n\
                    Fri => x, x\n\
                    Sat => x, x\n\
                    Sun => x, x";
    assert_eq!(text, expected);
}

#[test]
fn test_export_week_text_is_deterministic() {
    let records = sample_week();
    let a = export_week_text(day("2025-02-10"), &records);
    let b = export_week_text(day("2025-02-10"), &records);
    assert_eq!(a, b);
}

#[test]
fn test_export_week_text_open_day_and_foreign_records() {
    let records = vec![
        DayRecord::new(
            day("2025-02-14"),
            DayState::Open {
                clock_in: at("2025-02-14 08:15"),
            },
        ),
        // Not in the exported week.
        closed("2025-02-17", "09:00", "18:00"),
    ];
    let text = export_week_text(day("2025-02-10"), &records);
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 8);
    assert_eq!(lines[5], "Fri => 08:15, x");
    assert!(!text.contains("18:00"));
}

#[test]
fn test_week_header_variants() {
    assert_eq!(
        week_header(day("2025-01-27"), day("2025-02-02")),
        "27 January - 02 February 2025"
    );
    assert_eq!(
        week_header(day("2025-12-29"), day("2026-01-04")),
        "29 December 2025 - 04 January 2026"
    );
}

#[test]
fn test_iso_week_label() {
    assert_eq!(iso_week_label(day("2025-02-10")), "W07 2025");
    assert_eq!(iso_week_label(day("2025-12-29")), "W01 2026");
}

#[test]
fn test_week_summaries_carry_totals_and_inversions() {
    let mut records = sample_week();
    records.push(closed("2025-02-18", "18:00", "09:00"));

    let summaries =
        Core::build_week_summaries(&records, Weekday::Mon, WeekOrder::Ascending).unwrap();

    assert_eq!(summaries.len(), 2);
    assert_eq!(summaries[0].total_seconds, 63000);
    assert!(summaries[0].inverted_days.is_empty());
    assert_eq!(summaries[1].total_seconds, 0);
    assert_eq!(summaries[1].inverted_days, vec![day("2025-02-18")]);
}
