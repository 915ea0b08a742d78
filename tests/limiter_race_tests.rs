//! Library-level checks of the limiter's transactional read-modify-write.

use fitplanner::db::initialize::init_db;
use fitplanner::db::pool::DbPool;
use fitplanner::errors::AppError;
use fitplanner::limiter::{Consumed, Feature, WEEKLY_LIMIT, check_or_consume};
use std::sync::{Arc, Barrier};
use std::thread;

mod common;
use common::setup_test_db;

fn open_pool(db_path: &str) -> DbPool {
    let pool = DbPool::new(db_path).expect("open db");
    init_db(&pool.conn).expect("init db");
    pool
}

#[test]
fn test_counter_increments_to_limit() {
    let db_path = setup_test_db("race_increments");
    let mut pool = open_pool(&db_path);

    for n in 1..=WEEKLY_LIMIT {
        let outcome = check_or_consume(&mut pool, Some("u1"), Feature::Meal, "2026-W20")
            .expect("within limit");
        assert_eq!(outcome, Consumed::Counted(n));
    }

    let err = check_or_consume(&mut pool, Some("u1"), Feature::Meal, "2026-W20")
        .expect_err("limit exceeded");
    assert!(matches!(err, AppError::LimitReached(_)));
}

#[test]
fn test_rejection_does_not_mutate() {
    let db_path = setup_test_db("race_rejection_no_mutation");
    let mut pool = open_pool(&db_path);

    for _ in 0..WEEKLY_LIMIT {
        check_or_consume(&mut pool, Some("u1"), Feature::Workout, "2026-W20").expect("consume");
    }
    for _ in 0..3 {
        check_or_consume(&mut pool, Some("u1"), Feature::Workout, "2026-W20")
            .expect_err("exhausted");
    }

    let (meal, workout) =
        fitplanner::db::queries::load_usage(&pool.conn, "u1", "2026-W20").expect("load usage");
    assert_eq!(meal, 0);
    assert_eq!(workout, WEEKLY_LIMIT);
}

#[test]
fn test_missing_user_is_unauthenticated() {
    let db_path = setup_test_db("race_unauthenticated");
    let mut pool = open_pool(&db_path);

    let err = check_or_consume(&mut pool, None, Feature::Meal, "2026-W20")
        .expect_err("no session");
    assert!(matches!(err, AppError::Unauthenticated));
}

/// Two concurrent calls at count = limit - 1 must not both pass: the
/// IMMEDIATE transaction serializes them, so exactly one increments to the
/// limit and the other observes it.
#[test]
fn test_concurrent_calls_at_boundary_admit_exactly_one() {
    let db_path = setup_test_db("race_boundary");

    {
        let mut pool = open_pool(&db_path);
        for _ in 0..WEEKLY_LIMIT - 1 {
            check_or_consume(&mut pool, Some("u1"), Feature::Meal, "2026-W20").expect("warm up");
        }
    }

    let barrier = Arc::new(Barrier::new(2));
    let mut handles = Vec::new();
    for _ in 0..2 {
        let db_path = db_path.clone();
        let barrier = Arc::clone(&barrier);
        handles.push(thread::spawn(move || {
            let mut pool = DbPool::new(&db_path).expect("open db");
            barrier.wait();
            check_or_consume(&mut pool, Some("u1"), Feature::Meal, "2026-W20")
        }));
    }

    let results: Vec<_> = handles
        .into_iter()
        .map(|h| h.join().expect("thread panicked"))
        .collect();

    let ok = results.iter().filter(|r| r.is_ok()).count();
    let rejected = results
        .iter()
        .filter(|r| matches!(r, Err(AppError::LimitReached(_))))
        .count();
    assert_eq!(ok, 1);
    assert_eq!(rejected, 1);

    let pool = DbPool::new(&db_path).expect("open db");
    let (meal, _) =
        fitplanner::db::queries::load_usage(&pool.conn, "u1", "2026-W20").expect("load usage");
    assert_eq!(meal, WEEKLY_LIMIT);
}
