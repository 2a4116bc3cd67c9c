use super::Cell;

/// Relative positions of the eight Moore neighbors
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Grid stores a bounded 2D cellular automaton, row-major.
/// Everything outside `[0, rows) x [0, cols)` reads as dead, so the edge
/// absorbs rather than wraps.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead.
    /// Panics if `rows * cols` overflows; `GameOfLife::new` checks this first.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Dead; rows * cols],
        }
    }

    /// Build a grid from row vectors of booleans.
    /// Returns `None` unless every row has exactly `cols` entries.
    pub fn from_rows(rows: &[Vec<bool>], cols: usize) -> Option<Self> {
        if rows.iter().any(|row| row.len() != cols) {
            return None;
        }
        let cells = rows
            .iter()
            .flat_map(|row| row.iter().copied().map(Cell::from))
            .collect();
        Some(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Get grid dimensions as (rows, cols)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Convert signed coordinates to a 1D index, `None` when off the grid
    fn index(&self, row: isize, col: isize) -> Option<usize> {
        let row = usize::try_from(row).ok()?;
        let col = usize::try_from(col).ok()?;
        (row < self.rows && col < self.cols).then_some(row * self.cols + col)
    }

    /// Get cell at position; off-grid positions are dead
    pub fn get(&self, row: isize, col: isize) -> Cell {
        self.index(row, col)
            .map_or(Cell::Dead, |idx| self.cells[idx])
    }

    /// Set cell at position. Returns false if the position is off the grid.
    pub fn set(&mut self, row: isize, col: isize, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Flip a single cell. Returns false if the position is off the grid.
    pub fn toggle(&mut self, row: isize, col: isize) -> bool {
        match self.index(row, col) {
            Some(idx) => {
                self.cells[idx] = self.cells[idx].toggle();
                true
            }
            None => false,
        }
    }

    /// Count live cells in the Moore neighborhood, in `[0, 8]`
    pub fn count_live_neighbors(&self, row: isize, col: isize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|&&(dr, dc)| {
                let (Some(r), Some(c)) = (row.checked_add(dr), col.checked_add(dc)) else {
                    return false;
                };
                self.get(r, c).is_alive()
            })
            .count() as u8
    }

    /// Pure functional evolution - reads only `self`, returns the next grid.
    /// Every transition sees the previous generation, never a half-updated one.
    pub fn evolve(&self) -> Self {
        let cells = positions(self.rows, self.cols)
            .map(|(row, col)| {
                let current = self.get(row, col);
                current.evolve(self.count_live_neighbors(row, col))
            })
            .collect();

        Self {
            rows: self.rows,
            cols: self.cols,
            cells,
        }
    }

    /// Set every cell to dead
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = Cell::Dead);
    }

    /// Replace every cell with the result of `f`, visited in row-major order
    pub fn fill_with(&mut self, mut f: impl FnMut() -> Cell) {
        self.cells.iter_mut().for_each(|cell| *cell = f());
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Copy out the grid as row vectors of booleans
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.cells
            .chunks(self.cols.max(1))
            .take(self.rows)
            .map(|row| row.iter().map(|cell| cell.is_alive()).collect())
            .collect()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &cell)| (idx / self.cols, idx % self.cols, cell))
    }
}

/// Every (row, col) of a `rows x cols` grid in row-major order
fn positions(rows: usize, cols: usize) -> impl Iterator<Item = (isize, isize)> {
    let (rows, cols) = (rows as isize, cols as isize);
    (0..rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
}
