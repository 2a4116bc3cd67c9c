/// Placement of the board inside the grid area.
/// Cells are square and the whole board always fits on screen.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardLayout {
    pub cell_size: f32,
    pub origin_x: f32,
    pub origin_y: f32,
    rows: usize,
    cols: usize,
}

impl BoardLayout {
    /// Fit a `rows x cols` board into `width x height`, centered
    pub fn fit(width: f32, height: f32, rows: usize, cols: usize) -> Self {
        let cell_size = (width / cols.max(1) as f32)
            .min(height / rows.max(1) as f32)
            .floor()
            .max(1.0);
        Self {
            cell_size,
            origin_x: ((width - cell_size * cols as f32) / 2.0).max(0.0),
            origin_y: ((height - cell_size * rows as f32) / 2.0).max(0.0),
            rows,
            cols,
        }
    }

    /// Top-left screen position of a cell
    pub fn cell_origin(&self, row: usize, col: usize) -> (f32, f32) {
        (
            self.origin_x + col as f32 * self.cell_size,
            self.origin_y + row as f32 * self.cell_size,
        )
    }

    /// Board cell under a screen position, if any
    pub fn cell_at(&self, x: f32, y: f32) -> Option<(usize, usize)> {
        let col = ((x - self.origin_x) / self.cell_size).floor();
        let row = ((y - self.origin_y) / self.cell_size).floor();
        if row < 0.0 || col < 0.0 {
            return None;
        }
        let (row, col) = (row as usize, col as usize);
        (row < self.rows && col < self.cols).then_some((row, col))
    }
}
