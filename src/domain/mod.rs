mod cell;
mod grid;
mod game;
mod patterns;
mod snapshot;

pub use cell::Cell;
pub use grid::Grid;
pub use game::{GameOfLife, RANDOM_ALIVE_THRESHOLD};
pub use patterns::{Pattern, PatternCatalog, presets};
pub use snapshot::Snapshot;
