use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::stats::DEFAULT_WINDOW_DAYS;

/// Daybook configuration, read from `config.toml` in the application directory
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Data file location. Relative paths resolve against the application directory
    pub data_file: PathBuf,

    /// Number of days summarized by `stats`
    pub stats_days: u32,
}

impl Config {
    /// Absolute location of the data file
    pub fn data_path(&self, app_dir: &Path) -> PathBuf {
        app_dir.join(&self.data_file)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from("tasks.json"),
            stats_days: DEFAULT_WINDOW_DAYS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.data_file, PathBuf::from("tasks.json"));
        assert_eq!(config.stats_days, 7);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = toml::from_str("stats_days = 14").unwrap();
        assert_eq!(config.stats_days, 14);
        assert_eq!(config.data_file, PathBuf::from("tasks.json"));
    }

    #[test]
    fn test_data_path_relative_and_absolute() {
        let app_dir = Path::new("/home/user/.daybook");

        let relative = Config::default();
        assert_eq!(
            relative.data_path(app_dir),
            PathBuf::from("/home/user/.daybook/tasks.json")
        );

        let absolute = Config {
            data_file: PathBuf::from("/srv/daybook/tasks.json"),
            ..Config::default()
        };
        assert_eq!(
            absolute.data_path(app_dir),
            PathBuf::from("/srv/daybook/tasks.json")
        );
    }
}
