use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::db::queries::{clear_meals, insert_meal};
use crate::errors::{AppError, AppResult};
use crate::models::meal::MealKind;
use crate::ui::messages;

/// Maintain today's meal plan (the scheduler derives meal items from it).
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Meal { name, kind, clear } = cmd {
        let pool = DbPool::new(&cfg.database)?;

        if *clear {
            let removed = clear_meals(&pool.conn)?;
            audit(&pool.conn, "meal", "plan", &format!("cleared {removed}"))?;
            messages::success(format!("Removed {removed} meal(s) from the plan"));
            return Ok(());
        }

        let name = name
            .as_deref()
            .ok_or_else(|| AppError::Other("meal name required (or use --clear)".to_string()))?;
        let kind =
            MealKind::from_str(kind).ok_or_else(|| AppError::InvalidMealKind(kind.clone()))?;

        let id = insert_meal(&pool.conn, name, kind)?;
        audit(&pool.conn, "meal", name, &format!("added as {}", kind.as_str()))?;
        messages::success(format!("Meal '{}' added ({}, id {})", name, kind.as_str(), id));
    }

    Ok(())
}
