//! Command-line interface module
//!
//! One handler per command, each doing its own load/mutate/save cycle:
//! - add: Record a new task
//! - list: Show today's (or all) tasks
//! - done: Mark a task complete
//! - stats: Summarize the trailing window
pub mod add;
pub mod done;
pub mod list;
pub mod stats;

use std::path::PathBuf;

use crate::config::{self, Config};
use crate::display::Palette;
use crate::error::{DaybookError, Result};
use crate::store;

/// Resolved locations and settings shared by every command
pub struct Context {
    pub data_file: PathBuf,
    pub config: Config,
    pub palette: Palette,
}

impl Context {
    /// Resolve the user's config and make sure the data file exists
    pub fn initialize() -> Result<Self> {
        let app_dir = config::app_dir()?;
        let config = config::load_or_default(&app_dir)?;
        let data_file = config.data_path(&app_dir);

        store::init(&data_file)?;

        Ok(Self {
            data_file,
            config,
            palette: Palette::detect(),
        })
    }
}

/// Parse an optional estimate in minutes, treating absence as 0
fn parse_minutes(raw: Option<&str>) -> Result<u32> {
    match raw {
        None => Ok(0),
        Some(value) => value.trim().parse::<u32>().map_err(|_| {
            DaybookError::InvalidArgument(format!(
                "estimated minutes '{}' is not a non-negative integer",
                value
            ))
        }),
    }
}

fn parse_id(raw: &str) -> Result<u64> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| DaybookError::InvalidArgument(format!("task id '{}' is not a number", raw)))
}
