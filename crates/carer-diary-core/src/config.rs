//! Layered runtime settings and log setup.
//!
//! Sources, lowest priority first: built-in defaults, a TOML file, then
//! `CARER_DIARY_*` environment variables (nested keys joined with `__`, e.g.
//! `CARER_DIARY_SCHEDULE__UPCOMING_HORIZON_DAYS=14`).

use std::path::Path;

use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use crate::schedule::DEFAULT_HORIZON_DAYS;

/// File read by [`Settings::load`] when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "carer-diary.toml";

const ENV_PREFIX: &str = "CARER_DIARY";

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct DatabaseSettings {
    /// SQLite file path
    pub path: String,
}

impl Default for DatabaseSettings {
    fn default() -> Self {
        Self {
            path: "carer-diary.db".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ScheduleSettings {
    /// Forward-looking window for upcoming visits, in days
    pub upcoming_horizon_days: u32,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            upcoming_horizon_days: DEFAULT_HORIZON_DAYS,
        }
    }
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LogSettings {
    /// `tracing` filter directive, overridden by `RUST_LOG`
    pub filter: String,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            filter: "carer_diary_core=info".into(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Default, PartialEq)]
pub struct Settings {
    pub database: DatabaseSettings,
    pub schedule: ScheduleSettings,
    pub log: LogSettings,
}

impl Settings {
    /// Defaults, then `path` (or [`DEFAULT_CONFIG_FILE`] if present), then
    /// the environment. An explicit `path` must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).format(FileFormat::Toml).required(true),
            None => File::with_name(DEFAULT_CONFIG_FILE)
                .format(FileFormat::Toml)
                .required(false),
        };

        let config = Self::defaults()?
            .add_source(file)
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()?;

        config.try_deserialize()
    }

    fn defaults() -> Result<ConfigBuilder<config::builder::DefaultState>, ConfigError> {
        let defaults = Settings::default();
        Config::builder()
            .set_default("database.path", defaults.database.path)?
            .set_default(
                "schedule.upcoming_horizon_days",
                i64::from(defaults.schedule.upcoming_horizon_days),
            )?
            .set_default("log.filter", defaults.log.filter)
    }
}

/// Install the global `tracing` subscriber. `RUST_LOG` wins over the
/// configured filter. Returns false if a subscriber was already installed.
pub fn init_tracing(settings: &LogSettings) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&settings.filter)),
        )
        .try_init()
        .is_ok()
}
