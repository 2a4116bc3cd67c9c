// Domain layer - simulation core and pattern data
pub mod domain;

// Application layer - controller, scheduling, persistence
pub mod application;

// Infrastructure layer - UI, rendering, input
pub mod ui;
pub mod rendering;
pub mod input;

pub mod config;
pub mod error;

// Re-exports for convenience
pub use domain::{Cell, GameOfLife, Grid, Pattern, PatternCatalog, Snapshot, presets};
pub use application::{Command, Controller, FileStore, KeyValueStore, MemoryStore, TickScheduler};
pub use config::AppConfig;
pub use error::{LifeError, Result};
