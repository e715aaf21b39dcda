// simulation.rs - Config -> initial grid -> snapshot sequence

use tracing::info;

use crate::config::{RunConfig, Seed};
use crate::error::Error;
use crate::evolver::GridEvolver;
use crate::grid::Grid;
use crate::patterns::{apply_pattern, find_pattern, scatter, seeded_rng};

/// The output of a complete run.
#[derive(Debug, Clone)]
pub struct Simulation {
    /// Generation `k` of the run at index `k`.
    pub snapshots: Vec<Grid>,
    /// Seed actually used for a scatter start, so the run can be replayed.
    pub rng_seed: Option<u64>,
}

/// Seeds the initial grid described by `config` and evolves it for
/// `config.iterations` snapshots.
///
/// # Errors
///
/// Returns [`Error::InvalidArgument`] if `iterations` is zero or negative,
/// [`Error::InvalidDimension`] for a zero-sized grid, and the pattern errors
/// of [`find_pattern`] and [`apply_pattern`].
pub fn simulate(config: &RunConfig) -> Result<Simulation, Error> {
    let iterations = usize::try_from(config.iterations)
        .ok()
        .filter(|&n| n >= 1)
        .ok_or(Error::InvalidArgument {
            name: "iterations",
            value: config.iterations,
        })?;

    let (initial, rng_seed) = match &config.seed {
        Seed::Scatter { live_cells } => {
            let (mut rng, seed) = seeded_rng(config.rng_seed);
            let grid = scatter(config.rows, config.cols, *live_cells, &mut rng)?;
            (grid, Some(seed))
        }
        Seed::Pattern { name } => {
            let grid = apply_pattern(config.rows, config.cols, find_pattern(name)?)?;
            (grid, None)
        }
    };

    info!(
        rows = config.rows,
        cols = config.cols,
        iterations,
        population = initial.population(),
        rng_seed,
        "starting run"
    );

    let snapshots = GridEvolver::from_grid(initial).run(iterations)?;
    Ok(Simulation { snapshots, rng_seed })
}
