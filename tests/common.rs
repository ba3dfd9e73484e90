#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{NaiveDate, NaiveDateTime};
use std::env;
use std::fs;
use std::path::PathBuf;
use std::thread;

/// Per-test home directory, named after the running test.
pub fn test_home() -> PathBuf {
    let test_name: String = thread::current()
        .name()
        .unwrap_or("main")
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();

    let mut home: PathBuf = env::temp_dir();
    home.push(format!("hours_home_{}", test_name));
    fs::create_dir_all(&home).ok();
    home
}

/// The binary under test, with HOME pointed at this test's own directory so
/// neither a developer's configuration nor another test's leaks in.
pub fn hours() -> Command {
    let mut cmd = cargo_bin_cmd!("hours");
    cmd.env("HOME", test_home());
    cmd
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hours.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_hours_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the schema through the CLI (test mode: no config file written).
pub fn init_db(db_path: &str) {
    hours()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

pub fn day(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").expect("valid date")
}

pub fn at(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid instant")
}
