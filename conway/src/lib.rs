// lib.rs - Crate root and re-exports

//! Conway's Game of Life on a bounded grid.
//!
//! [`GridEvolver`] owns a [`Grid`] and advances it with the standard
//! birth-on-3, survive-on-2-or-3 rule. Cells beyond the edge do not exist:
//! they are neither wrapped around nor counted. [`GridEvolver::run`] turns an
//! evolver into an ordered sequence of independent snapshots for display.
//!
//! ```
//! use conway::GridEvolver;
//!
//! let blinker = ".....\n.....\n.###.\n.....\n.....".parse().unwrap();
//! let mut evolver = GridEvolver::from_grid(blinker);
//! let snapshots = evolver.run(3).unwrap();
//! assert_eq!(snapshots[0], snapshots[2]);
//! assert_ne!(snapshots[0], snapshots[1]);
//! ```

pub mod config;
pub mod cycle;
pub mod error;
pub mod evolver;
pub mod grid;
pub mod patterns;
pub mod simulation;

pub use config::{ConfigError, Preset, RunConfig, Seed};
pub use cycle::{Cycle, find_cycle};
pub use error::{DimensionError, Error};
pub use evolver::{GridEvolver, State};
pub use grid::Grid;
pub use simulation::{Simulation, simulate};
