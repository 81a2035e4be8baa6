//! Configuration module
//!
//! Locates the per-user application directory and reads the optional
//! config.toml inside it.

mod types;

pub use types::Config;

use directories::BaseDirs;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::error::{DaybookError, Result};
use crate::stats::MAX_WINDOW_DAYS;

const APP_DIR_NAME: &str = ".daybook";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Per-user application directory (`~/.daybook`)
pub fn app_dir() -> Result<PathBuf> {
    let base = BaseDirs::new()
        .ok_or_else(|| DaybookError::Config("Cannot determine home directory".to_string()))?;
    Ok(base.home_dir().join(APP_DIR_NAME))
}

/// Load `config.toml` from `app_dir`, falling back to defaults when it is absent
pub fn load_or_default(app_dir: &Path) -> Result<Config> {
    let path = app_dir.join(CONFIG_FILE_NAME);
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(Config::default());
    }
    load(&path)
}

/// Load configuration from a TOML file
pub fn load(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| {
        DaybookError::Config(format!(
            "Cannot read config from '{}': {}",
            path.display(),
            e
        ))
    })?;

    let config: Config = toml::from_str(&content)?;
    if !(1..=MAX_WINDOW_DAYS).contains(&config.stats_days) {
        return Err(DaybookError::Config(format!(
            "stats_days must be between 1 and {} in '{}', got {}",
            MAX_WINDOW_DAYS,
            path.display(),
            config.stats_days
        )));
    }

    debug!(path = %path.display(), ?config, "loaded config");
    Ok(config)
}
