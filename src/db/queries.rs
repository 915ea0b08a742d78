use crate::errors::{AppError, AppResult};
use crate::models::meal::{Meal, MealKind};
use crate::models::user::UserProfile;
use crate::models::workout::Workout;
use rusqlite::{Connection, OptionalExtension, Row, params};

// ---------------------------------------------------------------------------
// users
// ---------------------------------------------------------------------------

pub fn upsert_profile(conn: &Connection, profile: &UserProfile) -> AppResult<()> {
    conn.execute(
        "INSERT INTO users (id, premium, tester) VALUES (?1, ?2, ?3)
         ON CONFLICT(id) DO UPDATE SET premium = ?2, tester = ?3",
        params![
            profile.id,
            if profile.premium { 1 } else { 0 },
            if profile.tester { 1 } else { 0 },
        ],
    )?;
    Ok(())
}

/// A user with no profile row is a plain authenticated account:
/// both privilege flags default to false.
pub fn load_profile(conn: &Connection, user_id: &str) -> AppResult<UserProfile> {
    let row = conn
        .query_row(
            "SELECT id, premium, tester FROM users WHERE id = ?1",
            [user_id],
            |row| {
                Ok(UserProfile {
                    id: row.get(0)?,
                    premium: row.get::<_, i32>(1)? == 1,
                    tester: row.get::<_, i32>(2)? == 1,
                })
            },
        )
        .optional()?;

    Ok(row.unwrap_or(UserProfile {
        id: user_id.to_string(),
        premium: false,
        tester: false,
    }))
}

// ---------------------------------------------------------------------------
// usage counters
// ---------------------------------------------------------------------------

/// Read the (meal, workout) counters for a user/week pair.
/// A missing row reads as (0, 0); rows are created lazily on first consume.
pub fn load_usage(conn: &Connection, user_id: &str, week: &str) -> AppResult<(u32, u32)> {
    let row = conn
        .query_row(
            "SELECT meal, workout FROM usage WHERE user_id = ?1 AND week = ?2",
            params![user_id, week],
            |row| Ok((row.get::<_, u32>(0)?, row.get::<_, u32>(1)?)),
        )
        .optional()?;

    Ok(row.unwrap_or((0, 0)))
}

// ---------------------------------------------------------------------------
// meals (today's plan)
// ---------------------------------------------------------------------------

fn map_meal_row(row: &Row) -> rusqlite::Result<Meal> {
    let kind_str: String = row.get("kind")?;
    let kind = MealKind::from_db_str(&kind_str).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidMealKind(kind_str.clone())),
        )
    })?;

    Ok(Meal {
        id: row.get("id")?,
        name: row.get("name")?,
        kind,
    })
}

pub fn insert_meal(conn: &Connection, name: &str, kind: MealKind) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO meals (name, kind, position)
         VALUES (?1, ?2, (SELECT COALESCE(MAX(position), -1) + 1 FROM meals))",
        params![name, kind.to_db_str()],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_meals(conn: &Connection) -> AppResult<Vec<Meal>> {
    let mut stmt = conn.prepare("SELECT * FROM meals ORDER BY position ASC, id ASC")?;

    let rows = stmt.query_map([], map_meal_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn clear_meals(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM meals", [])?)
}

// ---------------------------------------------------------------------------
// workouts (7-day plan, ordered by position = day offset from today)
// ---------------------------------------------------------------------------

pub fn insert_workout(conn: &Connection, name: &str) -> AppResult<i64> {
    conn.execute(
        "INSERT INTO workouts (name, position)
         VALUES (?1, (SELECT COALESCE(MAX(position), -1) + 1 FROM workouts))",
        params![name],
    )?;
    Ok(conn.last_insert_rowid())
}

pub fn load_workouts(conn: &Connection) -> AppResult<Vec<Workout>> {
    let mut stmt = conn.prepare("SELECT id, name FROM workouts ORDER BY position ASC, id ASC")?;

    let rows = stmt.query_map([], |row| {
        Ok(Workout {
            id: row.get(0)?,
            name: row.get(1)?,
        })
    })?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn clear_workouts(conn: &Connection) -> AppResult<usize> {
    Ok(conn.execute("DELETE FROM workouts", [])?)
}
