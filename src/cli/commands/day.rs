use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::db::queries::{load_meals, load_workouts};
use crate::errors::{AppError, AppResult};
use crate::models::item::ScheduleItem;
use crate::scheduler::planner::Planner;
use crate::scheduler::rebuild::RebuildContext;
use crate::scheduler::store::PlanStore;
use crate::ui::messages;
use crate::utils::date;

/// Rebuild and/or list one day's timeline.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Day {
        date: date_str,
        rebuild,
        today,
    } = cmd
    {
        let day =
            date::parse_date(date_str).ok_or_else(|| AppError::InvalidDate(date_str.clone()))?;

        let mut planner = Planner::open(PlanStore::new(&cfg.plan_file));

        if *rebuild {
            let today = match today {
                Some(s) => {
                    date::parse_date(s).ok_or_else(|| AppError::InvalidDate(s.clone()))?
                }
                None => date::today(),
            };

            let pool = DbPool::new(&cfg.database)?;
            let meals = load_meals(&pool.conn)?;
            let workouts = load_workouts(&pool.conn)?;
            let prefs = cfg.time_prefs()?;

            let ctx = RebuildContext {
                today,
                meals: &meals,
                workouts: &workouts,
                prefs: &prefs,
            };
            planner.rebuild(day, &ctx)?;
        }

        print_day(day, planner.items(day));
    }

    Ok(())
}

fn print_day(day: chrono::NaiveDate, items: &[ScheduleItem]) {
    if items.is_empty() {
        messages::info(format!("No items on {day}"));
        return;
    }

    println!("Timeline for {day}:");
    for item in items {
        println!(
            "  {}  {:<8}  {:<30}  {}",
            item.time_str(),
            item.kind.as_str(),
            item.title,
            item.id
        );
    }
}
