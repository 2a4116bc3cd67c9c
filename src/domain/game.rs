//! The simulation core: a bounded grid plus generation and run state.
//!
//! `GameOfLife` does no scheduling and no I/O. A controller decides when to
//! call [`GameOfLife::next_generation`]; renderers read the public queries.

use rand::Rng;

use super::{Cell, Grid, Snapshot};
use crate::error::{LifeError, Result};

/// Chance threshold for `randomize`: a sample above this makes a live cell.
pub const RANDOM_ALIVE_THRESHOLD: f64 = 0.7;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameOfLife {
    grid: Grid,
    generation: u64,
    is_running: bool,
}

impl GameOfLife {
    /// Create a simulation with every cell dead, at generation 0, stopped.
    /// Fails for an empty grid or one too large to address.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let addressable = rows
            .checked_mul(cols)
            .is_some_and(|cells| cells <= isize::MAX as usize);
        if rows == 0 || cols == 0 || !addressable {
            return Err(LifeError::InvalidDimensions { rows, cols });
        }
        Ok(Self {
            grid: Grid::new(rows, cols),
            generation: 0,
            is_running: false,
        })
    }

    /// Rebuild a simulation from a saved snapshot. Nothing is produced
    /// unless the whole snapshot is valid.
    pub fn from_snapshot(snapshot: &Snapshot) -> Result<Self> {
        Ok(Self {
            grid: snapshot.to_grid()?,
            generation: snapshot.generation,
            is_running: false,
        })
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.to_rows(),
            generation: self.generation,
            rows: self.rows(),
            cols: self.cols(),
        }
    }

    pub const fn rows(&self) -> usize {
        self.grid.dimensions().0
    }

    pub const fn cols(&self) -> usize {
        self.grid.dimensions().1
    }

    pub const fn generation(&self) -> u64 {
        self.generation
    }

    pub const fn grid(&self) -> &Grid {
        &self.grid
    }

    pub const fn is_running(&self) -> bool {
        self.is_running
    }

    pub fn set_running(&mut self, running: bool) {
        self.is_running = running;
    }

    /// Whether the cell is alive; anything off the grid is dead
    pub fn cell(&self, row: isize, col: isize) -> bool {
        self.grid.get(row, col).is_alive()
    }

    /// Live cells among the eight surrounding positions
    pub fn count_neighbors(&self, row: isize, col: isize) -> u8 {
        self.grid.count_live_neighbors(row, col)
    }

    /// Advance exactly one generation. The next grid is computed from the
    /// current one as a whole before it replaces it.
    pub fn next_generation(&mut self) {
        self.grid = self.grid.evolve();
        self.generation += 1;
    }

    /// Flip a cell; off-grid coordinates are ignored
    pub fn toggle_cell(&mut self, row: isize, col: isize) {
        self.grid.toggle(row, col);
    }

    /// Kill every cell and reset the generation counter
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;
    }

    /// Seed roughly 30% of cells alive from the thread-local generator
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    /// Seed cells from `rng`: alive when a uniform `[0, 1)` sample exceeds 0.7
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.grid
            .fill_with(|| Cell::from(rng.random::<f64>() > RANDOM_ALIVE_THRESHOLD));
        self.generation = 0;
    }

    /// Bring to life every pattern cell that lands on the grid.
    /// Cells already alive stay alive; cells falling off the grid are dropped.
    pub fn place_pattern(&mut self, cells: &[(isize, isize)], offset_row: isize, offset_col: isize) {
        for &(r, c) in cells {
            let (Some(row), Some(col)) = (offset_row.checked_add(r), offset_col.checked_add(c)) else {
                continue;
            };
            self.grid.set(row, col, Cell::Alive);
        }
    }

    pub fn population(&self) -> usize {
        self.grid.population()
    }

    /// Coordinates of every live cell, row-major
    pub fn live_cells(&self) -> Vec<(usize, usize)> {
        self.grid
            .iter_cells()
            .filter(|(_, _, cell)| cell.is_alive())
            .map(|(row, col, _)| (row, col))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::presets;
    use rand::{SeedableRng, rngs::StdRng};

    fn game_with(rows: usize, cols: usize, cells: &[(isize, isize)], at: (isize, isize)) -> GameOfLife {
        let mut game = GameOfLife::new(rows, cols).unwrap();
        game.place_pattern(cells, at.0, at.1);
        game
    }

    fn shifted(cells: &[(isize, isize)], dr: isize, dc: isize) -> Vec<(usize, usize)> {
        let mut out: Vec<_> = cells
            .iter()
            .map(|&(r, c)| ((r + dr) as usize, (c + dc) as usize))
            .collect();
        out.sort_unstable();
        out
    }

    #[test]
    fn test_new_is_empty_and_stopped() {
        let game = GameOfLife::new(4, 6).unwrap();

        assert_eq!((game.rows(), game.cols()), (4, 6));
        assert_eq!(game.generation(), 0);
        assert!(!game.is_running());
        assert_eq!(game.population(), 0);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(matches!(
            GameOfLife::new(0, 5),
            Err(LifeError::InvalidDimensions { rows: 0, cols: 5 })
        ));
        assert!(GameOfLife::new(5, 0).is_err());
    }

    #[test]
    fn test_oversized_dimensions_rejected() {
        assert!(matches!(
            GameOfLife::new(usize::MAX, 2),
            Err(LifeError::InvalidDimensions { cols: 2, .. })
        ));
        assert!(GameOfLife::new(usize::MAX, 1).is_err());
        assert!(GameOfLife::new(usize::MAX / 2, 3).is_err());
        assert!(GameOfLife::new(isize::MAX as usize + 1, 1).is_err());
    }

    #[test]
    fn test_out_of_bounds_cells_are_dead() {
        let mut game = GameOfLife::new(3, 3).unwrap();
        game.randomize_with(&mut StdRng::seed_from_u64(1));
        game.place_pattern(presets::BLOCK.cells, 0, 0);

        for (r, c) in [(-1, -1), (-1, 1), (3, 0), (0, 3), (3, 3), (-100, 50)] {
            assert!(!game.cell(r, c));
        }
        for r in -2..5 {
            for c in -2..5 {
                assert!(game.count_neighbors(r, c) <= 8);
            }
        }
    }

    #[test]
    fn test_count_neighbors_excludes_self() {
        let game = game_with(3, 3, &[(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0), (2, 1), (2, 2)], (0, 0));

        assert_eq!(game.count_neighbors(1, 1), 8);
        assert_eq!(game.count_neighbors(0, 0), 3);
        assert_eq!(game.count_neighbors(-1, -1), 1);
    }

    #[test]
    fn test_three_neighbors_always_alive_next() {
        // dead center with three live neighbors is born
        let mut game = game_with(3, 3, &[(0, 0), (0, 2), (2, 1)], (0, 0));
        assert_eq!(game.count_neighbors(1, 1), 3);
        game.next_generation();
        assert!(game.cell(1, 1));

        // live center with three live neighbors survives
        let mut game = game_with(3, 3, &[(0, 0), (0, 2), (2, 1), (1, 1)], (0, 0));
        assert_eq!(game.count_neighbors(1, 1), 3);
        game.next_generation();
        assert!(game.cell(1, 1));
    }

    #[test]
    fn test_step_uses_previous_generation_only() {
        // An in-place update would let (0,1) die before (1,0) is evaluated.
        let mut game = game_with(3, 3, &[(0, 1), (1, 1), (2, 1)], (0, 0));
        game.next_generation();

        assert_eq!(game.live_cells(), vec![(1, 0), (1, 1), (1, 2)]);
    }

    #[test]
    fn test_clear_then_step() {
        let mut game = GameOfLife::new(8, 8).unwrap();
        game.randomize_with(&mut StdRng::seed_from_u64(42));
        game.next_generation();

        game.clear();
        assert_eq!(game.generation(), 0);
        assert_eq!((game.rows(), game.cols()), (8, 8));

        game.next_generation();
        assert_eq!(game.generation(), 1);
        assert_eq!(game.population(), 0);
    }

    #[test]
    fn test_step_ignores_running_flag() {
        let mut game = GameOfLife::new(2, 2).unwrap();
        game.next_generation();
        game.set_running(true);
        game.next_generation();
        assert_eq!(game.generation(), 2);
    }

    #[test]
    fn test_blinker_oscillates() {
        let mut game = game_with(5, 5, presets::BLINKER.cells, (0, 0));

        game.next_generation();
        assert_eq!(game.live_cells(), vec![(1, 0), (1, 1), (1, 2)]);

        game.next_generation();
        assert_eq!(game.live_cells(), vec![(0, 1), (1, 1), (2, 1)]);
        assert_eq!(game.generation(), 2);
    }

    #[test]
    fn test_blinker_on_exact_grid() {
        let mut game = game_with(3, 3, presets::BLINKER.cells, (0, 0));
        game.next_generation();
        game.next_generation();
        assert_eq!(game.live_cells(), vec![(0, 1), (1, 1), (2, 1)]);
    }

    #[test]
    fn test_block_is_still() {
        let mut game = game_with(2, 2, presets::BLOCK.cells, (0, 0));
        let start = game.live_cells();
        for _ in 0..10 {
            game.next_generation();
            assert_eq!(game.live_cells(), start);
        }
    }

    #[test]
    fn test_glider_translates() {
        let mut game = game_with(10, 10, presets::GLIDER.cells, (0, 0));
        for _ in 0..4 {
            game.next_generation();
        }
        assert_eq!(game.live_cells(), shifted(presets::GLIDER.cells, 1, 1));
    }

    #[test]
    fn test_glider_dies_into_corner() {
        // Glider hitting the absorbing edge settles into a block
        let mut game = game_with(6, 6, presets::GLIDER.cells, (0, 0));
        for _ in 0..40 {
            game.next_generation();
        }
        assert_eq!(game.live_cells(), vec![(4, 4), (4, 5), (5, 4), (5, 5)]);
    }

    #[test]
    fn test_toggle_cell() {
        let mut game = GameOfLife::new(3, 3).unwrap();
        game.next_generation();

        game.toggle_cell(1, 2);
        assert!(game.cell(1, 2));
        game.toggle_cell(1, 2);
        assert!(!game.cell(1, 2));

        game.toggle_cell(3, 0);
        game.toggle_cell(-1, 0);
        assert_eq!(game.population(), 0);
        assert_eq!(game.generation(), 1);
    }

    #[test]
    fn test_place_pattern_clips_and_keeps_existing() {
        let mut game = GameOfLife::new(4, 4).unwrap();
        game.toggle_cell(3, 3);

        game.place_pattern(presets::BLOCK.cells, -1, -1);
        assert_eq!(game.live_cells(), vec![(0, 0), (3, 3)]);

        game.place_pattern(presets::BLOCK.cells, 3, 3);
        assert_eq!(game.population(), 2);

        game.place_pattern(&[(0, 0)], isize::MAX, 0);
        assert_eq!(game.population(), 2);
    }

    #[test]
    fn test_randomize_is_seeded_and_resets_generation() {
        let mut a = GameOfLife::new(20, 20).unwrap();
        let mut b = GameOfLife::new(20, 20).unwrap();
        a.next_generation();

        a.randomize_with(&mut StdRng::seed_from_u64(7));
        b.randomize_with(&mut StdRng::seed_from_u64(7));

        assert_eq!(a, b);
        assert_eq!(a.generation(), 0);
        let population = a.population();
        assert!(population > 40 && population < 200, "population {population}");
    }

    #[test]
    fn test_snapshot_round_trip() {
        let mut game = GameOfLife::new(5, 7).unwrap();
        game.randomize_with(&mut StdRng::seed_from_u64(3));
        game.next_generation();
        game.next_generation();

        let restored = GameOfLife::from_snapshot(&game.snapshot()).unwrap();

        assert_eq!(restored.grid(), game.grid());
        assert_eq!(restored.generation(), 2);
        assert_eq!((restored.rows(), restored.cols()), (5, 7));
    }
}
