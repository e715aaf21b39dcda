// evolver.rs - Owns a grid and advances it one generation at a time

use tracing::{debug, trace};

use crate::error::Error;
use crate::grid::Grid;

/// Relative positions of the Moore neighbourhood.
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Lifecycle of a [`GridEvolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// Accepts further `step()` and `run()` calls.
    Ready,
    /// A `run()` has completed; the evolver is read-only.
    Terminated,
}

/// Applies the Life rule to an owned grid with clamped (non-wrapping) edges.
///
/// Each generation is computed entirely from the previous one into a fresh
/// buffer before it replaces the current grid, so no cell ever sees a
/// neighbour that was already updated in the same step.
#[derive(Debug, Clone)]
pub struct GridEvolver {
    grid: Grid,
    generation: usize,
    state: State,
}

impl GridEvolver {
    /// Takes ownership of a caller-supplied cell matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if the matrix has no rows, no
    /// columns, or rows of differing length.
    pub fn new(initial: Vec<Vec<bool>>) -> Result<Self, Error> {
        Ok(Self::from_grid(Grid::from_rows(initial)?))
    }

    /// Wraps a grid that has already been validated.
    #[must_use]
    pub fn from_grid(grid: Grid) -> Self {
        debug!(rows = grid.rows(), cols = grid.cols(), population = grid.population(), "evolver created");
        Self {
            grid,
            generation: 0,
            state: State::Ready,
        }
    }

    /// The current generation's grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Number of rule applications since construction.
    #[must_use]
    pub fn generation(&self) -> usize {
        self.generation
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Releases the current grid.
    #[must_use]
    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Counts live cells among the up to eight neighbours of `(row, col)`.
    /// Neighbours that fall outside the grid are skipped, never wrapped.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if `(row, col)` is outside the grid.
    pub fn neighbor_count(&self, row: usize, col: usize) -> Result<u8, Error> {
        if !self.grid.contains(row, col) {
            return Err(self.grid.out_of_bounds(row, col));
        }
        Ok(live_neighbors(&self.grid, row, col))
    }

    /// Advances the grid by one generation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Terminated`] once a `run()` has completed.
    pub fn step(&mut self) -> Result<(), Error> {
        self.ensure_ready()?;
        self.advance();
        Ok(())
    }

    /// Produces `iterations` snapshots: the current grid followed by the
    /// result of each of `iterations - 1` further steps. Afterwards the
    /// evolver is [`State::Terminated`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidArgument`] if `iterations` is zero and
    /// [`Error::Terminated`] if a previous run already finished.
    pub fn run(&mut self, iterations: usize) -> Result<Vec<Grid>, Error> {
        self.ensure_ready()?;
        if iterations < 1 {
            return Err(Error::InvalidArgument {
                name: "iterations",
                value: 0,
            });
        }

        let start = self.generation;
        let mut snapshots = Vec::with_capacity(iterations);
        snapshots.push(self.grid.clone());
        for _ in 1..iterations {
            self.advance();
            snapshots.push(self.grid.clone());
        }
        self.state = State::Terminated;

        debug!(
            from = start,
            to = self.generation,
            population = self.grid.population(),
            "run finished"
        );
        Ok(snapshots)
    }

    fn ensure_ready(&self) -> Result<(), Error> {
        match self.state {
            State::Ready => Ok(()),
            State::Terminated => Err(Error::Terminated {
                generation: self.generation,
            }),
        }
    }

    fn advance(&mut self) {
        self.grid = next_generation(&self.grid);
        self.generation += 1;
        trace!(generation = self.generation, population = self.grid.population(), "step");
    }
}

/// Life transition for a single cell.
fn next_state(alive: bool, neighbors: u8) -> bool {
    match (alive, neighbors) {
        (true, 2) | (true, 3) => true, // survival
        (false, 3) => true,            // birth
        _ => false,                    // death, or stays dead
    }
}

fn live_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let count = NEIGHBOR_OFFSETS
        .iter()
        .filter_map(|&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            grid.contains(r, c).then_some((r, c))
        })
        .filter(|&(r, c)| grid.alive_at(r, c))
        .count();
    // At most eight offsets.
    count as u8
}

fn next_generation(current: &Grid) -> Grid {
    let mut next = current.blank_like();
    let cols = current.cols();
    for (index, cell) in next.cells_mut().iter_mut().enumerate() {
        let (row, col) = (index / cols, index % cols);
        *cell = next_state(current.alive_at(row, col), live_neighbors(current, row, col));
    }
    next
}
