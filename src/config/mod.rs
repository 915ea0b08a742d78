use crate::errors::{AppError, AppResult};
use crate::scheduler::prefs::TimePrefs;
use crate::utils::time::parse_time;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    pub plan_file: String,
    /// Vertical scale of the timeline: how many pixels one hour spans.
    #[serde(default = "default_pixels_per_hour")]
    pub pixels_per_hour: f64,
    #[serde(default = "default_breakfast_time")]
    pub breakfast_time: String,
    #[serde(default = "default_lunch_time")]
    pub lunch_time: String,
    #[serde(default = "default_dinner_time")]
    pub dinner_time: String,
    #[serde(default = "default_snack_time")]
    pub snack_time: String,
    #[serde(default = "default_workout_time")]
    pub workout_time: String,
}

fn default_pixels_per_hour() -> f64 {
    60.0
}
fn default_breakfast_time() -> String {
    "09:00".to_string()
}
fn default_lunch_time() -> String {
    "12:00".to_string()
}
fn default_dinner_time() -> String {
    "18:00".to_string()
}
fn default_snack_time() -> String {
    "20:00".to_string()
}
fn default_workout_time() -> String {
    "17:00".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: Self::database_file().to_string_lossy().to_string(),
            plan_file: Self::plan_file_path().to_string_lossy().to_string(),
            pixels_per_hour: default_pixels_per_hour(),
            breakfast_time: default_breakfast_time(),
            lunch_time: default_lunch_time(),
            dinner_time: default_dinner_time(),
            snack_time: default_snack_time(),
            workout_time: default_workout_time(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = std::env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("fitplanner")
        } else {
            let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
            home.join(".fitplanner")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("fitplanner.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("fitplanner.sqlite")
    }

    /// Return the full path of the JSON plan store
    pub fn plan_file_path() -> PathBuf {
        Self::config_dir().join("fitplanner.plan.json")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> Self {
        let path = Self::config_file();

        if path.exists() {
            match fs::read_to_string(&path) {
                Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
                Err(_) => Config::default(),
            }
        } else {
            Config::default()
        }
    }

    /// Parse the configured time preferences into scheduler form.
    /// Malformed entries are rejected rather than silently defaulted.
    pub fn time_prefs(&self) -> AppResult<TimePrefs> {
        let parse = |label: &str, s: &str| {
            parse_time(s).ok_or_else(|| AppError::Config(format!("{}: bad time '{}'", label, s)))
        };
        Ok(TimePrefs {
            breakfast: parse("breakfast_time", &self.breakfast_time)?,
            lunch: parse("lunch_time", &self.lunch_time)?,
            dinner: parse("dinner_time", &self.dinner_time)?,
            snack: parse("snack_time", &self.snack_time)?,
            workout: parse("workout_time", &self.workout_time)?,
        })
    }

    /// Initialize configuration, database and plan files
    pub fn init_all(custom_db: Option<String>, is_test: bool) -> io::Result<()> {
        let dir = Self::config_dir();
        fs::create_dir_all(&dir)?;

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_db {
            let p = std::path::Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            dir.join("fitplanner.sqlite")
        };

        let config = Config {
            database: db_path.to_string_lossy().to_string(),
            ..Config::default()
        };

        // Write config file
        if !is_test {
            let yaml = serde_yaml::to_string(&config)
                .map_err(|e| io::Error::other(format!("serialize config: {e}")))?;
            let mut file = fs::File::create(Self::config_file())?;
            file.write_all(yaml.as_bytes())?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        // Create empty DB file if not exists
        if !db_path.exists() {
            fs::File::create(&db_path)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(())
    }
}
