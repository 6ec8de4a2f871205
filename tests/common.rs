#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rat() -> Command {
    cargo_bin_cmd!("rattendance")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rattendance.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize DB and register a small roster useful for many tests
pub fn init_db_with_roster(db_path: &str) {
    // init DB (creates tables); --test avoids touching the real config file
    rat()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rat()
        .args(["--db", db_path, "register", "F001", "Alice Cruz", "Math"])
        .assert()
        .success();

    rat()
        .args(["--db", db_path, "register", "F002", "Ben Reyes", "Physics"])
        .assert()
        .success();
}

/// Record a check event with a fixed timestamp (deterministic tests)
pub fn check_at(db_path: &str, id: &str, action: &str, at: &str) {
    rat()
        .args(["--db", db_path, "check", id, action, "--at", at])
        .assert()
        .success();
}
