use predicates::str::contains;

mod common;
use common::{fp, init_db, init_with_plan, setup_plan_file, setup_test_db};

#[test]
fn test_day_rebuild_lists_derived_items() {
    let db_path = setup_test_db("it_day_rebuild");
    let plan_path = setup_plan_file("it_day_rebuild");
    init_with_plan(&db_path);

    fp()
        .args([
            "--db", &db_path, "--plan", &plan_path,
            "day", "2026-09-01", "--rebuild", "--today", "2026-09-01",
        ])
        .assert()
        .success()
        .stdout(contains("09:00"))
        .stdout(contains("Oats"))
        .stdout(contains("12:00"))
        .stdout(contains("Salad"))
        .stdout(contains("17:00"))
        .stdout(contains("Push day"));
}

#[test]
fn test_event_persists_across_invocations() {
    let db_path = setup_test_db("it_event_persists");
    let plan_path = setup_plan_file("it_event_persists");
    init_db(&db_path);

    fp()
        .args([
            "--db", &db_path, "--plan", &plan_path,
            "event", "2026-09-01", "10:30", "Dentist",
        ])
        .assert()
        .success();

    // a separate invocation reloads the plan file from disk
    fp()
        .args(["--db", &db_path, "--plan", &plan_path, "day", "2026-09-01"])
        .assert()
        .success()
        .stdout(contains("10:30"))
        .stdout(contains("Dentist"));
}

#[test]
fn test_cli_drag_snaps_and_survives_rebuild() {
    let db_path = setup_test_db("it_cli_drag");
    let plan_path = setup_plan_file("it_cli_drag");
    init_with_plan(&db_path);

    fp()
        .args([
            "--db", &db_path, "--plan", &plan_path,
            "day", "2026-09-01", "--rebuild", "--today", "2026-09-01",
        ])
        .assert()
        .success();

    // 37 px at the default 60 px/hour scale = 37 minutes, snapped to 09:45
    fp()
        .args([
            "--db", &db_path, "--plan", &plan_path,
            "drag", "2026-09-01", "meal-0-Oats", "--dy", "37",
        ])
        .assert()
        .success()
        .stdout(contains("09:45"));

    // the dragged time survives a recomputation of the day
    fp()
        .args([
            "--db", &db_path, "--plan", &plan_path,
            "day", "2026-09-01", "--rebuild", "--today", "2026-09-01",
        ])
        .assert()
        .success()
        .stdout(contains("09:45"));
}

#[test]
fn test_cli_drag_clamps_to_day_bounds() {
    let db_path = setup_test_db("it_cli_drag_clamp");
    let plan_path = setup_plan_file("it_cli_drag_clamp");
    init_db(&db_path);

    fp()
        .args([
            "--db", &db_path, "--plan", &plan_path,
            "event", "2026-09-01", "00:15", "Stretch",
        ])
        .assert()
        .success();

    let out = fp()
        .args(["--db", &db_path, "--plan", &plan_path, "day", "2026-09-01"])
        .output()
        .expect("list day");
    let stdout = String::from_utf8_lossy(&out.stdout);
    let id = stdout
        .lines()
        .find(|l| l.contains("Stretch"))
        .and_then(|l| l.split_whitespace().last())
        .expect("event id")
        .to_string();

    fp()
        .args([
            "--db", &db_path, "--plan", &plan_path,
            "drag", "2026-09-01", &id, "--dy", "-500",
        ])
        .assert()
        .success()
        .stdout(contains("00:00"));
}

#[test]
fn test_deleting_meal_from_plan_drops_derived_item_but_keeps_events() {
    let db_path = setup_test_db("it_meal_removed");
    let plan_path = setup_plan_file("it_meal_removed");
    init_with_plan(&db_path);

    fp()
        .args([
            "--db", &db_path, "--plan", &plan_path,
            "day", "2026-09-01", "--rebuild", "--today", "2026-09-01",
        ])
        .assert()
        .success()
        .stdout(contains("Oats"));

    fp()
        .args([
            "--db", &db_path, "--plan", &plan_path,
            "event", "2026-09-01", "10:30", "Dentist",
        ])
        .assert()
        .success();

    fp()
        .args(["--db", &db_path, "meal", "--clear"])
        .assert()
        .success();

    let assert = fp()
        .args([
            "--db", &db_path, "--plan", &plan_path,
            "day", "2026-09-01", "--rebuild", "--today", "2026-09-01",
        ])
        .assert()
        .success()
        .stdout(contains("Dentist"));
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(!stdout.contains("Oats"));
}

#[test]
fn test_del_removes_item() {
    let db_path = setup_test_db("it_del_item");
    let plan_path = setup_plan_file("it_del_item");
    init_with_plan(&db_path);

    fp()
        .args([
            "--db", &db_path, "--plan", &plan_path,
            "day", "2026-09-01", "--rebuild", "--today", "2026-09-01",
        ])
        .assert()
        .success();

    fp()
        .args([
            "--db", &db_path, "--plan", &plan_path,
            "del", "2026-09-01", "meal-1-Salad",
        ])
        .assert()
        .success();

    let assert = fp()
        .args(["--db", &db_path, "--plan", &plan_path, "day", "2026-09-01"])
        .assert()
        .success();
    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    assert!(!stdout.contains("Salad"));
}

#[test]
fn test_del_unknown_item_fails() {
    let db_path = setup_test_db("it_del_unknown");
    let plan_path = setup_plan_file("it_del_unknown");
    init_db(&db_path);

    fp()
        .args([
            "--db", &db_path, "--plan", &plan_path,
            "del", "2026-09-01", "event-404",
        ])
        .assert()
        .failure()
        .stderr(contains("No item"));
}

#[test]
fn test_corrupted_plan_file_is_treated_as_empty() {
    let db_path = setup_test_db("it_corrupted_plan");
    let plan_path = setup_plan_file("it_corrupted_plan");
    init_db(&db_path);
    std::fs::write(&plan_path, "{{{{ definitely not json").expect("write garbage");

    fp()
        .args(["--db", &db_path, "--plan", &plan_path, "day", "2026-09-01"])
        .assert()
        .success()
        .stdout(contains("No items"));
}

#[test]
fn test_audit_log_records_operations() {
    let db_path = setup_test_db("it_audit_log");
    let plan_path = setup_plan_file("it_audit_log");
    init_db(&db_path);

    fp()
        .args(["--db", &db_path, "user", "u1", "--premium"])
        .assert()
        .success();
    fp()
        .args([
            "--db", &db_path, "gen", "meal", "--user", "u1", "--week", "2026-W10",
        ])
        .assert()
        .success();
    fp()
        .args([
            "--db", &db_path, "--plan", &plan_path,
            "event", "2026-09-01", "10:30", "Dentist",
        ])
        .assert()
        .success();

    fp()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("[user]"))
        .stdout(contains("[gen]"))
        .stdout(contains("[event]"));
}

#[test]
fn test_db_maintenance_commands() {
    let db_path = setup_test_db("it_db_maintenance");
    init_db(&db_path);

    fp()
        .args(["--db", &db_path, "db", "--check"])
        .assert()
        .success()
        .stdout(contains("integrity: ok"));

    fp()
        .args(["--db", &db_path, "db", "--info"])
        .assert()
        .success()
        .stdout(contains("users:"))
        .stdout(contains("meals:"));
}
