//! Error types for the `life_board` crate.
//!
//! The simulation itself clamps out-of-range input instead of failing, so
//! these only cover construction, persistence, and configuration.

/// Errors raised at the fallible edges of the simulation.
#[derive(Debug, thiserror::Error)]
pub enum LifeError {
    /// A grid needs at least one row and one column.
    #[error("grid dimensions must be positive, got {rows}x{cols}")]
    InvalidDimensions {
        /// Requested row count.
        rows: usize,
        /// Requested column count.
        cols: usize,
    },

    /// A snapshot's cell matrix disagrees with its declared dimensions.
    #[error("snapshot grid does not match declared size {expected_rows}x{expected_cols}")]
    SnapshotShape {
        /// Declared row count.
        expected_rows: usize,
        /// Declared column count.
        expected_cols: usize,
    },

    /// JSON encoding or decoding failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// The backing store could not be read or written.
    #[error("store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An environment variable held an unusable value.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LifeError>;
