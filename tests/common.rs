#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn fp() -> Command {
    cargo_bin_cmd!("fitplanner")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fitplanner.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a unique plan-file path inside the system temp dir and remove any existing file
pub fn setup_plan_file(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_fitplanner.plan.json", name));
    let plan_path = path.to_string_lossy().to_string();
    fs::remove_file(&plan_path).ok();
    plan_path
}

/// Initialize config-less DB schema for a test database
pub fn init_db(db_path: &str) {
    fp()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Initialize DB and seed a small plan useful for scheduler tests
pub fn init_with_plan(db_path: &str) {
    init_db(db_path);

    fp()
        .args(["--db", db_path, "meal", "Oats", "--kind", "breakfast"])
        .assert()
        .success();

    fp()
        .args(["--db", db_path, "meal", "Salad", "--kind", "lunch"])
        .assert()
        .success();

    fp()
        .args(["--db", db_path, "workout", "Push day"])
        .assert()
        .success();
}
