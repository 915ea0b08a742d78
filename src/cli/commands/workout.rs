use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{clear_workouts, insert_workout};
use crate::errors::{AppError, AppResult};
use crate::ui::messages;

/// Maintain the 7-day workout plan. Position in the list is the day offset
/// from today the workout lands on.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Workout { name, clear } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        if *clear {
            let removed = clear_workouts(&pool.conn)?;
            audit(&pool.conn, "workout", "plan", &format!("cleared {removed}"))?;
            messages::success(format!("Removed {removed} workout(s) from the plan"));
            return Ok(());
        }

        let name = name
            .as_deref()
            .ok_or_else(|| AppError::Other("workout name required (or use --clear)".to_string()))?;

        let id = insert_workout(&pool.conn, name)?;
        audit(&pool.conn, "workout", name, "appended to plan")?;
        messages::success(format!("Workout '{}' appended (id {})", name, id));
    }

    Ok(())
}
