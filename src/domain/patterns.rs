/// Represents a named pattern that can be placed on the grid.
/// Coordinates are `(row, col)` offsets relative to wherever it is placed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub cells: &'static [(isize, isize)],
}

impl Pattern {
    pub const fn new(
        name: &'static str,
        description: &'static str,
        cells: &'static [(isize, isize)],
    ) -> Self {
        Self { name, description, cells }
    }

    /// Largest row and column offset used by the pattern, `(0, 0)` if empty
    pub fn extent(&self) -> (isize, isize) {
        self.cells
            .iter()
            .fold((0, 0), |(max_row, max_col), &(r, c)| (max_row.max(r), max_col.max(c)))
    }

    /// Offset that roughly centers the pattern's bounding box on a
    /// `rows x cols` grid. Negative when the pattern is larger than the grid.
    pub fn centered_offset(&self, rows: usize, cols: usize) -> (isize, isize) {
        let (max_row, max_col) = self.extent();
        (
            (rows as isize - max_row - 1).div_euclid(2),
            (cols as isize - max_col - 1).div_euclid(2),
        )
    }
}

/// Immutable lookup table of patterns, passed to whoever resolves names.
#[derive(Clone, Debug)]
pub struct PatternCatalog {
    patterns: Vec<Pattern>,
}

impl PatternCatalog {
    pub fn new(patterns: Vec<Pattern>) -> Self {
        Self { patterns }
    }

    /// Still lifes, oscillators and spaceships offered by the pattern picker
    pub fn standard() -> Self {
        Self::new(presets::ALL.to_vec())
    }

    /// Find a pattern by exact name
    pub fn get(&self, name: &str) -> Option<&Pattern> {
        self.patterns.iter().find(|p| p.name == name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.patterns.iter().map(|p| p.name).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Pattern> {
        self.patterns.iter()
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for PatternCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::Pattern;

    /// Glider - simplest spaceship, moves diagonally
    pub const GLIDER: Pattern = Pattern::new(
        "Glider",
        "Spaceship (period 4)",
        &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    );

    pub const BLOCK: Pattern = Pattern::new(
        "Block",
        "Still life",
        &[(0, 0), (0, 1), (1, 0), (1, 1)],
    );

    pub const BEE_HIVE: Pattern = Pattern::new(
        "Bee-hive",
        "Still life",
        &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 2)],
    );

    pub const LOAF: Pattern = Pattern::new(
        "Loaf",
        "Still life",
        &[(0, 1), (0, 2), (1, 0), (1, 3), (2, 1), (2, 3), (3, 2)],
    );

    pub const BOAT: Pattern = Pattern::new(
        "Boat",
        "Still life",
        &[(0, 0), (0, 1), (1, 0), (1, 2), (2, 1)],
    );

    pub const TUB: Pattern = Pattern::new(
        "Tub",
        "Still life",
        &[(0, 1), (1, 0), (1, 2), (2, 1)],
    );

    /// Blinker - period 2 oscillator
    pub const BLINKER: Pattern = Pattern::new(
        "Blinker",
        "Oscillator (period 2)",
        &[(0, 1), (1, 1), (2, 1)],
    );

    pub const TOAD: Pattern = Pattern::new(
        "Toad",
        "Oscillator (period 2)",
        &[(1, 0), (1, 1), (1, 2), (0, 1), (0, 2), (0, 3)],
    );

    pub const BEACON: Pattern = Pattern::new(
        "Beacon",
        "Oscillator (period 2)",
        &[(0, 0), (0, 1), (1, 0), (2, 3), (3, 2), (3, 3)],
    );

    /// Pulsar - period 3 oscillator, drawn with a two cell margin
    pub const PULSAR: Pattern = Pattern::new(
        "Pulsar",
        "Oscillator (period 3)",
        &[
            // Top
            (2, 4), (2, 5), (2, 6), (2, 10), (2, 11), (2, 12),
            // Upper arms
            (4, 2), (4, 7), (4, 9), (4, 14),
            (5, 2), (5, 7), (5, 9), (5, 14),
            (6, 2), (6, 7), (6, 9), (6, 14),
            // Center
            (7, 4), (7, 5), (7, 6), (7, 10), (7, 11), (7, 12),
            (9, 4), (9, 5), (9, 6), (9, 10), (9, 11), (9, 12),
            // Lower arms
            (10, 2), (10, 7), (10, 9), (10, 14),
            (11, 2), (11, 7), (11, 9), (11, 14),
            (12, 2), (12, 7), (12, 9), (12, 14),
            // Bottom
            (14, 4), (14, 5), (14, 6), (14, 10), (14, 11), (14, 12),
        ],
    );

    pub const PENTADECATHLON: Pattern = Pattern::new(
        "Pentadecathlon",
        "Oscillator",
        &[
            (2, 3), (2, 4), (2, 5), (2, 6), (2, 7), (2, 8), (2, 9), (2, 10),
            (1, 4), (1, 9), (3, 4), (3, 9),
        ],
    );

    /// Lightweight Spaceship
    pub const LWSS: Pattern = Pattern::new(
        "LWSS",
        "Lightweight spaceship",
        &[
            (0, 1), (0, 4),
            (1, 0),
            (2, 0),
            (3, 0), (3, 4),
            (4, 0), (4, 1), (4, 2), (4, 3),
        ],
    );

    /// Middleweight Spaceship
    pub const MWSS: Pattern = Pattern::new(
        "MWSS",
        "Middleweight spaceship",
        &[
            (0, 1), (0, 2), (0, 3), (0, 4),
            (1, 0),
            (2, 0),
            (3, 0), (3, 4),
            (4, 0), (4, 3),
        ],
    );

    /// Heavyweight Spaceship
    pub const HWSS: Pattern = Pattern::new(
        "HWSS",
        "Heavyweight spaceship",
        &[
            (0, 1), (0, 2), (0, 3), (0, 4), (0, 5),
            (1, 0),
            (2, 0),
            (3, 0), (3, 5),
            (4, 0), (4, 4),
        ],
    );

    /// Every preset, in picker order
    pub const ALL: &[Pattern] = &[
        GLIDER,
        BLOCK,
        BEE_HIVE,
        LOAF,
        BOAT,
        TUB,
        BLINKER,
        TOAD,
        BEACON,
        PULSAR,
        PENTADECATHLON,
        LWSS,
        MWSS,
        HWSS,
    ];
}
