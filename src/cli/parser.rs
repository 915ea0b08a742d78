use clap::{Parser, Subcommand};

/// Command-line interface definition for fitplanner
/// CLI application to plan meals, workouts and events with SQLite
#[derive(Parser)]
#[command(
    name = "fitplanner",
    version = env!("CARGO_PKG_VERSION"),
    about = "A simple day-planner CLI: meals, workouts and events with weekly generation quotas",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Override plan file path (useful for tests or custom plan store)
    #[arg(global = true, long = "plan")]
    pub plan: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Manage the configuration file
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(long = "check", help = "Check configuration file for missing fields")]
        check: bool,
    },

    /// Manage the database (integrity checks, info)
    Db {
        #[arg(long = "check", help = "Check database integrity")]
        check: bool,

        #[arg(long = "info", help = "Show database information")]
        info: bool,
    },

    /// Print the internal audit log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Register or update a user profile
    User {
        /// User identifier
        id: String,

        #[arg(long, help = "Mark the account as premium (quota exempt)")]
        premium: bool,

        #[arg(long, help = "Mark the account as tester (quota exempt)")]
        tester: bool,
    },

    /// Add a meal to today's plan, or clear the plan
    Meal {
        /// Meal name (omit with --clear)
        name: Option<String>,

        #[arg(
            long,
            help = "Meal kind: breakfast, lunch, dinner or snack",
            default_value = "lunch"
        )]
        kind: String,

        #[arg(long, help = "Remove all meals from the plan")]
        clear: bool,
    },

    /// Append a workout to the 7-day plan, or clear the plan
    Workout {
        /// Workout name (omit with --clear)
        name: Option<String>,

        #[arg(long, help = "Remove all workouts from the plan")]
        clear: bool,
    },

    /// Request a gated generation (checks the weekly quota first)
    Gen {
        /// Feature to generate: meal or workout
        feature: String,

        #[arg(long, help = "Acting user id (the authenticated session)")]
        user: Option<String>,

        /// Override the ISO week label (testing only)
        #[arg(long = "week", hide = true)]
        week: Option<String>,
    },

    /// Show this week's generation usage for a user
    Quota {
        #[arg(long, help = "Acting user id (the authenticated session)")]
        user: Option<String>,

        /// Override the ISO week label (testing only)
        #[arg(long = "week", hide = true)]
        week: Option<String>,
    },

    /// Rebuild and/or list a day's timeline
    Day {
        /// Date of the timeline (YYYY-MM-DD)
        date: String,

        #[arg(long, help = "Recompute the day from the meal/workout plans")]
        rebuild: bool,

        /// Treat this date as "today" for derivation (testing only)
        #[arg(long = "today", hide = true)]
        today: Option<String>,
    },

    /// Add a manual event to a day's timeline
    Event {
        /// Date of the event (YYYY-MM-DD)
        date: String,

        /// Time of the event (HH:MM)
        time: String,

        /// Display title
        title: String,
    },

    /// Delete a timeline item by id
    Del {
        /// Date of the item (YYYY-MM-DD)
        date: String,

        /// Item id (as shown by `day`)
        id: String,
    },

    /// Drag a timeline item by a vertical pixel offset
    Drag {
        /// Date of the item (YYYY-MM-DD)
        date: String,

        /// Item id (as shown by `day`)
        id: String,

        #[arg(long, allow_hyphen_values = true, help = "Vertical pixel delta")]
        dy: f64,
    },
}
