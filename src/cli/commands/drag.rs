use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::scheduler::drag::{DragOutcome, DragState};
use crate::scheduler::planner::Planner;
use crate::scheduler::store::PlanStore;
use crate::ui::messages;
use crate::utils::date;

/// Drag a timeline item by a vertical pixel offset and commit the move.
/// Drives the same gesture machine the interactive timeline uses: arm the
/// item, move by `--dy`, release.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Drag { date: date_str, id, dy } = cmd {
        let day =
            date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;

        let mut gesture = DragState::new();
        gesture.arm(id);
        if *dy != 0.0 {
            gesture.pointer_move(*dy);
        }

        match gesture.release() {
            DragOutcome::Commit { item_id, offset_px } => {
                let mut planner = Planner::open(PlanStore::new(&cfg.plan_file));
                let moved =
                    planner.commit_drag(day, &item_id, offset_px, cfg.pixels_per_hour)?;

                let pool = DbPool::new(&cfg.database)?;
                audit(
                    &pool.conn,
                    "drag",
                    &item_id,
                    &format!("moved to {}", moved.format("%Y-%m-%d %H:%M")),
                )?;

                messages::success(format!(
                    "Item '{}' moved to {}",
                    item_id,
                    moved.format("%H:%M")
                ));
            }
            DragOutcome::OpenDetail { item_id } => {
                // release without movement is a tap
                messages::info(format!("No movement: '{}' would open its detail view", item_id));
            }
            DragOutcome::None => {}
        }
    }

    Ok(())
}
