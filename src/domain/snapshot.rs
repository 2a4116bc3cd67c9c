//! Flat, unversioned save format for a simulation.

use serde::{Deserialize, Serialize};

use super::Grid;
use crate::error::{LifeError, Result};

/// Everything needed to rebuild a simulation: `{grid, generation, rows, cols}`.
/// Serialized as JSON with `grid` as an array of boolean rows.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub grid: Vec<Vec<bool>>,
    #[serde(default)]
    pub generation: u64,
    pub rows: usize,
    pub cols: usize,
}

impl Snapshot {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parse without validating shape; see [`Snapshot::to_grid`]
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Check the declared size and build the grid it describes
    pub fn to_grid(&self) -> Result<Grid> {
        if self.rows == 0 || self.cols == 0 {
            return Err(LifeError::InvalidDimensions {
                rows: self.rows,
                cols: self.cols,
            });
        }
        let shape_error = || LifeError::SnapshotShape {
            expected_rows: self.rows,
            expected_cols: self.cols,
        };
        if self.grid.len() != self.rows {
            return Err(shape_error());
        }
        Grid::from_rows(&self.grid, self.cols).ok_or_else(shape_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Cell;

    fn sample() -> Snapshot {
        Snapshot {
            grid: vec![vec![false, true], vec![true, false], vec![false, false]],
            generation: 7,
            rows: 3,
            cols: 2,
        }
    }

    #[test]
    fn test_json_field_names() {
        let json = sample().to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["generation"], 7);
        assert_eq!(value["rows"], 3);
        assert_eq!(value["cols"], 2);
        assert_eq!(value["grid"][1][0], true);
    }

    #[test]
    fn test_generation_defaults_to_zero() {
        let json = r#"{"grid":[[true]],"rows":1,"cols":1}"#;
        let snapshot = Snapshot::from_json(json).unwrap();

        assert_eq!(snapshot.generation, 0);
        assert_eq!(snapshot.to_grid().unwrap().get(0, 0), Cell::Alive);
    }

    #[test]
    fn test_missing_grid_is_rejected() {
        let json = r#"{"generation":3,"rows":2,"cols":2}"#;
        assert!(matches!(Snapshot::from_json(json), Err(LifeError::Serialization(_))));
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert!(Snapshot::from_json("not json").is_err());
        assert!(Snapshot::from_json(r#"{"grid":[[1]],"rows":1,"cols":1}"#).is_err());
    }

    #[test]
    fn test_shape_mismatch_is_rejected() {
        let mut snapshot = sample();
        snapshot.rows = 4;
        assert!(matches!(snapshot.to_grid(), Err(LifeError::SnapshotShape { .. })));

        let mut snapshot = sample();
        snapshot.grid[2].push(true);
        assert!(matches!(snapshot.to_grid(), Err(LifeError::SnapshotShape { .. })));
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        let snapshot = Snapshot {
            grid: Vec::new(),
            generation: 0,
            rows: 0,
            cols: 0,
        };
        assert!(matches!(snapshot.to_grid(), Err(LifeError::InvalidDimensions { .. })));
    }
}
