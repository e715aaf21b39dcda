// error.rs - Error types for grid construction and evolution

use thiserror::Error;

/// Why a cell matrix cannot be used as a grid.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum DimensionError {
    #[error("grid must have at least one row and one column, got {rows}x{cols}")]
    Empty { rows: usize, cols: usize },

    #[error("grid of {rows}x{cols} cells is too large")]
    TooLarge { rows: usize, cols: usize },

    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
}

/// Errors reported by [`Grid`](crate::Grid), [`GridEvolver`](crate::GridEvolver)
/// and the seeding helpers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid grid dimensions: {0}")]
    InvalidDimension(#[from] DimensionError),

    #[error("unexpected character {ch:?} on line {line}")]
    InvalidCell { line: usize, ch: char },

    #[error("invalid argument `{name}` = {value}: must be at least 1")]
    InvalidArgument { name: &'static str, value: i64 },

    #[error("cell ({row}, {col}) is outside the {rows}x{cols} grid")]
    OutOfBounds {
        row: usize,
        col: usize,
        rows: usize,
        cols: usize,
    },

    #[error("evolver terminated at generation {generation}")]
    Terminated { generation: usize },

    #[error("unknown pattern `{0}`")]
    UnknownPattern(String),

    #[error("pattern `{pattern}` does not fit in a {rows}x{cols} grid")]
    PatternOutOfBounds {
        pattern: &'static str,
        rows: usize,
        cols: usize,
    },
}
