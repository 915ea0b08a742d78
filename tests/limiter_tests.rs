use predicates::str::contains;

mod common;
use common::{fp, init_db, setup_test_db};

#[test]
fn test_limit_allows_three_then_rejects() {
    let db_path = setup_test_db("limiter_three_then_reject");
    init_db(&db_path);

    for n in 1..=3 {
        fp()
            .args([
                "--db", &db_path, "gen", "meal", "--user", "u1", "--week", "2026-W10",
            ])
            .assert()
            .success()
            .stdout(contains(format!("{} of 3", n)));
    }

    fp()
        .args([
            "--db", &db_path, "gen", "meal", "--user", "u1", "--week", "2026-W10",
        ])
        .assert()
        .failure()
        .stderr(contains("Weekly limit reached"));
}

#[test]
fn test_new_week_resets_counter() {
    let db_path = setup_test_db("limiter_week_reset");
    init_db(&db_path);

    for _ in 0..3 {
        fp()
            .args([
                "--db", &db_path, "gen", "meal", "--user", "u1", "--week", "2026-W10",
            ])
            .assert()
            .success();
    }

    // the old week is exhausted...
    fp()
        .args([
            "--db", &db_path, "gen", "meal", "--user", "u1", "--week", "2026-W10",
        ])
        .assert()
        .failure();

    // ...but the next week starts from zero
    fp()
        .args([
            "--db", &db_path, "gen", "meal", "--user", "u1", "--week", "2026-W11",
        ])
        .assert()
        .success()
        .stdout(contains("1 of 3"));
}

#[test]
fn test_features_count_independently() {
    let db_path = setup_test_db("limiter_feature_independent");
    init_db(&db_path);

    for _ in 0..3 {
        fp()
            .args([
                "--db", &db_path, "gen", "meal", "--user", "u1", "--week", "2026-W10",
            ])
            .assert()
            .success();
    }

    fp()
        .args([
            "--db", &db_path, "gen", "workout", "--user", "u1", "--week", "2026-W10",
        ])
        .assert()
        .success()
        .stdout(contains("1 of 3"));
}

#[test]
fn test_premium_user_never_hits_limit() {
    let db_path = setup_test_db("limiter_premium_bypass");
    init_db(&db_path);

    fp()
        .args(["--db", &db_path, "user", "vip", "--premium"])
        .assert()
        .success();

    for _ in 0..6 {
        fp()
            .args([
                "--db", &db_path, "gen", "meal", "--user", "vip", "--week", "2026-W10",
            ])
            .assert()
            .success()
            .stdout(contains("quota exempt"));
    }

    // exempt calls leave the counters untouched
    fp()
        .args([
            "--db", &db_path, "quota", "--user", "vip", "--week", "2026-W10",
        ])
        .assert()
        .success()
        .stdout(contains("meal:    0 of 3"));
}

#[test]
fn test_tester_user_never_hits_limit() {
    let db_path = setup_test_db("limiter_tester_bypass");
    init_db(&db_path);

    fp()
        .args(["--db", &db_path, "user", "qa", "--tester"])
        .assert()
        .success();

    for _ in 0..5 {
        fp()
            .args([
                "--db", &db_path, "gen", "workout", "--user", "qa", "--week", "2026-W10",
            ])
            .assert()
            .success();
    }
}

#[test]
fn test_unauthenticated_is_rejected() {
    let db_path = setup_test_db("limiter_unauthenticated");
    init_db(&db_path);

    fp()
        .args(["--db", &db_path, "gen", "meal", "--week", "2026-W10"])
        .assert()
        .failure()
        .stderr(contains("Not signed in"));
}

#[test]
fn test_unknown_feature_is_rejected() {
    let db_path = setup_test_db("limiter_unknown_feature");
    init_db(&db_path);

    fp()
        .args([
            "--db", &db_path, "gen", "poetry", "--user", "u1", "--week", "2026-W10",
        ])
        .assert()
        .failure()
        .stderr(contains("Unknown feature"));
}

#[test]
fn test_quota_reports_per_feature_counts() {
    let db_path = setup_test_db("limiter_quota_report");
    init_db(&db_path);

    for _ in 0..2 {
        fp()
            .args([
                "--db", &db_path, "gen", "meal", "--user", "u1", "--week", "2026-W10",
            ])
            .assert()
            .success();
    }
    fp()
        .args([
            "--db", &db_path, "gen", "workout", "--user", "u1", "--week", "2026-W10",
        ])
        .assert()
        .success();

    fp()
        .args([
            "--db", &db_path, "quota", "--user", "u1", "--week", "2026-W10",
        ])
        .assert()
        .success()
        .stdout(contains("meal:    2 of 3"))
        .stdout(contains("workout: 1 of 3"));
}
