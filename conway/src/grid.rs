// grid.rs - Grid type for Conway's Game of Life

use std::fmt;
use std::str::FromStr;

use crate::error::{DimensionError, Error};

/// A dense, row-major matrix of live/dead cells.
///
/// Dimensions are fixed when the grid is built and are always at least 1x1.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates a `rows x cols` grid with every cell dead.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if either dimension is zero or
    /// the cell count does not fit in `usize`.
    pub fn new(rows: usize, cols: usize) -> Result<Self, Error> {
        if rows == 0 || cols == 0 {
            return Err(DimensionError::Empty { rows, cols }.into());
        }
        let len = rows
            .checked_mul(cols)
            .ok_or(DimensionError::TooLarge { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            cells: vec![false; len],
        })
    }

    /// Builds a grid from a matrix of rows, taking ownership of it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the matrix is empty, its first
    /// row is empty, or any row differs in length from the first.
    pub fn from_rows(matrix: Vec<Vec<bool>>) -> Result<Self, Error> {
        let rows = matrix.len();
        let cols = matrix.first().map_or(0, Vec::len);
        if rows == 0 || cols == 0 {
            return Err(DimensionError::Empty { rows, cols }.into());
        }

        let mut cells = Vec::with_capacity(rows * cols);
        for (row, line) in matrix.into_iter().enumerate() {
            if line.len() != cols {
                return Err(DimensionError::Ragged {
                    row,
                    expected: cols,
                    found: line.len(),
                }
                .into());
            }
            cells.extend(line);
        }

        Ok(Self { rows, cols, cells })
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[must_use]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns `true` if `(row, col)` lies inside the grid.
    #[must_use]
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.cols
    }

    /// Returns the state of a cell, or `None` outside the grid.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> Option<bool> {
        self.contains(row, col)
            .then(|| self.cells[row * self.cols + col])
    }

    /// Sets the state of a cell.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `(row, col)` is outside the grid.
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), Error> {
        if !self.contains(row, col) {
            return Err(self.out_of_bounds(row, col));
        }
        self.cells[row * self.cols + col] = alive;
        Ok(())
    }

    /// Total number of cells, `rows * cols`.
    #[must_use]
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Number of live cells.
    #[must_use]
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Iterates over the rows as slices, top to bottom.
    pub fn iter_rows(&self) -> impl Iterator<Item = &[bool]> + '_ {
        self.cells.chunks_exact(self.cols)
    }

    /// Copies the grid back out into a matrix of rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<bool>> {
        self.iter_rows().map(<[bool]>::to_vec).collect()
    }

    pub(crate) fn out_of_bounds(&self, row: usize, col: usize) -> Error {
        Error::OutOfBounds {
            row,
            col,
            rows: self.rows,
            cols: self.cols,
        }
    }

    /// Unchecked read for callers that already clamped the coordinates.
    pub(crate) fn alive_at(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.cols + col]
    }

    /// Same dimensions, every cell dead. Used as the next-generation buffer.
    pub(crate) fn blank_like(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            cells: vec![false; self.cells.len()],
        }
    }

    pub(crate) fn cells_mut(&mut self) -> &mut [bool] {
        &mut self.cells
    }
}

/// Renders live cells as `#` and dead cells as `.`, one line per row.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for &alive in row {
                f.write_str(if alive { "#" } else { "." })?;
            }
        }
        Ok(())
    }
}

/// Parses the `Display` format back. `#` and `O` are live, `.` is dead;
/// blank lines and surrounding whitespace are ignored. Errors report the
/// 1-based line of the input.
impl FromStr for Grid {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut matrix = Vec::new();
        for (index, line) in s.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let row = line
                .chars()
                .map(|ch| match ch {
                    '#' | 'O' => Ok(true),
                    '.' => Ok(false),
                    other => Err(Error::InvalidCell {
                        line: index + 1,
                        ch: other,
                    }),
                })
                .collect::<Result<Vec<_>, _>>()?;
            matrix.push(row);
        }
        Self::from_rows(matrix)
    }
}
