//! fitplanner library root.
//! Exposes the CLI parser, the high-level run() function, and the limiter
//! and scheduler modules the binary is a thin harness over.

pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod limiter;
pub mod models;
pub mod scheduler;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => cli::commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
        Commands::User { .. } => cli::commands::user::handle(&cli.command, cfg),
        Commands::Meal { .. } => cli::commands::meal::handle(&cli.command, cfg),
        Commands::Workout { .. } => cli::commands::workout::handle(&cli.command, cfg),
        Commands::Gen { .. } => cli::commands::r#gen::handle(&cli.command, cfg),
        Commands::Quota { .. } => cli::commands::quota::handle(&cli.command, cfg),
        Commands::Day { .. } => cli::commands::day::handle(&cli.command, cfg),
        Commands::Event { .. } => cli::commands::event::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Drag { .. } => cli::commands::drag::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // load config once
    let mut cfg = Config::load();

    // command-line overrides for the DB and the plan store
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }
    if let Some(custom_plan) = &cli.plan {
        cfg.plan_file = custom_plan.clone();
    }

    dispatch(&cli, &cfg)
}
