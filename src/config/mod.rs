use crate::core::calculator::week::WeekOrder;
use crate::errors::{AppError, AppResult};
use crate::utils::date::parse_weekday;
use crate::utils::time::parse_time;
use chrono::{NaiveTime, Weekday};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub database: String,
    #[serde(default = "default_week_start")]
    pub week_start: String,
    #[serde(default = "default_clock_in")]
    pub default_clock_in: String,
    #[serde(default = "default_clock_out")]
    pub default_clock_out: String,
    #[serde(default = "default_seed_current_week")]
    pub seed_current_week: bool,
    #[serde(default)]
    pub week_order: WeekOrder,
}

fn default_week_start() -> String {
    "Mon".to_string()
}
fn default_clock_in() -> String {
    "09:00".to_string()
}
fn default_clock_out() -> String {
    "18:00".to_string()
}
fn default_seed_current_week() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Self::with_database(Self::database_file())
    }
}

impl Config {
    fn with_database(db_path: PathBuf) -> Self {
        Self {
            database: db_path.to_string_lossy().to_string(),
            week_start: default_week_start(),
            default_clock_in: default_clock_in(),
            default_clock_out: default_clock_out(),
            seed_current_week: default_seed_current_week(),
            week_order: WeekOrder::default(),
        }
    }

    /// Return the standard configuration directory (`~/.hours`).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".hours")
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("hours.conf")
    }

    /// Return the full path of the SQLite database
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("hours.sqlite")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        let path = Self::config_file();

        if path.exists() {
            let content = fs::read_to_string(&path).map_err(|_| AppError::ConfigLoad)?;
            Self::from_yaml(&content)
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        let cfg: Config = serde_yaml::from_str(content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Reject values that would only fail later, at first use.
    pub fn validate(&self) -> AppResult<()> {
        self.first_weekday()?;
        self.default_times()?;
        Ok(())
    }

    pub fn first_weekday(&self) -> AppResult<Weekday> {
        parse_weekday(&self.week_start)
    }

    /// Clock-in / clock-out used by a manual edit when neither the user nor
    /// the stored day provides one.
    pub fn default_times(&self) -> AppResult<(NaiveTime, NaiveTime)> {
        let t_in = parse_time(&self.default_clock_in).ok_or_else(|| {
            AppError::Config(format!("invalid default_clock_in '{}'", self.default_clock_in))
        })?;
        let t_out = parse_time(&self.default_clock_out).ok_or_else(|| {
            AppError::Config(format!(
                "invalid default_clock_out '{}'",
                self.default_clock_out
            ))
        })?;
        Ok((t_in, t_out))
    }

    /// Initialize configuration and database files.
    /// Returns the configuration that was written (or would have been, in test mode).
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        // DB name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = crate::utils::path::expand_tilde(&name);
            if p.is_absolute() { p } else { dir.join(p) }
        } else {
            dir.join("hours.sqlite")
        };

        let config = Self::with_database(db_path.clone());

        // Write config file
        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())
                .map_err(|_| AppError::ConfigSave)?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }
}
