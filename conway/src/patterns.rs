// patterns.rs - Initial configurations: named patterns and random scatter

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, warn};

use crate::error::Error;
use crate::grid::Grid;

/// A named set of live cells, given as `(row, col)` offsets from the
/// top-left corner of the pattern's bounding box.
#[derive(Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl Pattern {
    /// Rows spanned by the pattern.
    #[must_use]
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0)
    }

    /// Columns spanned by the pattern.
    #[must_use]
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0)
    }
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 2), (1, 1), (1, 2), (2, 0), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

/// Looks a pattern up by name, ignoring case and treating spaces, dashes
/// and underscores alike (`"gosper-glider-gun"` finds "Gosper Glider Gun").
///
/// # Errors
///
/// Returns [`Error::UnknownPattern`] if no pattern matches.
pub fn find_pattern(name: &str) -> Result<&'static Pattern, Error> {
    let wanted = normalize(name);
    PATTERNS
        .iter()
        .find(|p| normalize(p.name) == wanted)
        .ok_or_else(|| Error::UnknownPattern(name.to_owned()))
}

fn normalize(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            ' ' | '_' => '-',
            c => c.to_ascii_lowercase(),
        })
        .collect()
}

/// Builds a dead `rows x cols` grid with `pattern` centred in it.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] for a zero dimension and
/// [`Error::PatternOutOfBounds`] if the pattern does not fit.
pub fn apply_pattern(rows: usize, cols: usize, pattern: &Pattern) -> Result<Grid, Error> {
    let mut grid = Grid::new(rows, cols)?;
    let (height, width) = (pattern.height(), pattern.width());
    if height > rows || width > cols {
        return Err(Error::PatternOutOfBounds {
            pattern: pattern.name,
            rows,
            cols,
        });
    }

    let top = (rows - height) / 2;
    let left = (cols - width) / 2;
    for &(r, c) in pattern.cells {
        grid.set(top + r, left + c, true)?;
    }
    debug!(pattern = pattern.name, top, left, "pattern placed");
    Ok(grid)
}

/// Marks `live_cells` uniformly chosen cells alive. Coordinates are drawn
/// with replacement, so the resulting population can be lower than
/// `live_cells`.
///
/// # Errors
///
/// Returns [`Error::InvalidDimension`] for a zero dimension.
pub fn scatter<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    live_cells: usize,
    rng: &mut R,
) -> Result<Grid, Error> {
    let mut grid = Grid::new(rows, cols)?;
    let capacity = grid.cell_count();
    if live_cells > capacity {
        warn!(live_cells, capacity, "more live cells requested than the grid holds");
    }
    for _ in 0..live_cells {
        let row = rng.gen_range(0..rows);
        let col = rng.gen_range(0..cols);
        grid.set(row, col, true)?;
    }
    debug!(requested = live_cells, population = grid.population(), "scatter done");
    Ok(grid)
}

/// Returns a reproducible generator and the seed it was built from. Without
/// an explicit seed one is drawn from the thread-local generator.
#[must_use]
pub fn seeded_rng(seed: Option<u64>) -> (ChaCha8Rng, u64) {
    let seed = seed.unwrap_or_else(rand::random);
    (ChaCha8Rng::seed_from_u64(seed), seed)
}
