//! Startup configuration for the desktop app.
//!
//! Everything is optional and read from environment variables:
//! - `LIFE_BOARD_SIZE` -- initial square grid size, 1..=1000 (default 40)
//! - `LIFE_BOARD_INTERVAL_MS` -- initial tick interval, clamped to 50..=500 (default 200)
//! - `LIFE_BOARD_PATTERN` -- initial pattern name (default `Glider`)
//! - `LIFE_BOARD_STATE_DIR` -- directory for saved state (default `.life_board`)

use std::path::PathBuf;

use crate::application::{DEFAULT_INTERVAL_MS, MAX_INTERVAL_MS, MIN_INTERVAL_MS};
use crate::error::{LifeError, Result};

pub const DEFAULT_GRID_SIZE: usize = 40;
pub const MAX_GRID_SIZE: usize = 1000;
pub const DEFAULT_PATTERN: &str = "Glider";
pub const DEFAULT_STATE_DIR: &str = ".life_board";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub grid_size: usize,
    pub interval_ms: u32,
    pub pattern: String,
    pub state_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            grid_size: DEFAULT_GRID_SIZE,
            interval_ms: DEFAULT_INTERVAL_MS,
            pattern: DEFAULT_PATTERN.to_owned(),
            state_dir: PathBuf::from(DEFAULT_STATE_DIR),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary variable source
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let grid_size = match lookup("LIFE_BOARD_SIZE") {
            Some(raw) => parse_var::<usize>("LIFE_BOARD_SIZE", &raw)?,
            None => defaults.grid_size,
        };
        if !(1..=MAX_GRID_SIZE).contains(&grid_size) {
            return Err(LifeError::Config(format!(
                "LIFE_BOARD_SIZE must be between 1 and {MAX_GRID_SIZE}, got {grid_size}"
            )));
        }

        let interval_ms = match lookup("LIFE_BOARD_INTERVAL_MS") {
            Some(raw) => parse_var::<u32>("LIFE_BOARD_INTERVAL_MS", &raw)?,
            None => defaults.interval_ms,
        }
        .clamp(MIN_INTERVAL_MS, MAX_INTERVAL_MS);

        let pattern = lookup("LIFE_BOARD_PATTERN").unwrap_or(defaults.pattern);
        let state_dir = lookup("LIFE_BOARD_STATE_DIR")
            .map(PathBuf::from)
            .unwrap_or(defaults.state_dir);

        Ok(Self {
            grid_size,
            interval_ms,
            pattern,
            state_dir,
        })
    }
}

fn parse_var<T>(name: &str, raw: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim()
        .parse()
        .map_err(|e| LifeError::Config(format!("invalid {name}: {e}")))
}
