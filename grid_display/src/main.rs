// main.rs - Evolve a Game of Life grid, then play it back or log it

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use conway::{Cycle, Grid, Preset, RunConfig, Seed, find_cycle, simulate};

mod ui;

#[derive(Parser, Debug)]
#[command(name = "grid_display")]
#[command(version)]
#[command(about = "Evolve a Game of Life grid with fixed edges and play the generations back")]
struct Cli {
    /// TOML run configuration (takes precedence over --preset)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Built-in setup: `life` (50x50, 100 generations) or `maze` (40x40, 70)
    #[arg(long, default_value = "life")]
    preset: Preset,

    /// Start from a named pattern instead of a random scatter
    #[arg(short, long)]
    pattern: Option<String>,

    /// Seed for the random scatter
    #[arg(long)]
    rng_seed: Option<u64>,

    /// Number of generations to produce, including the initial grid
    #[arg(short, long, allow_negative_numbers = true)]
    iterations: Option<i64>,

    /// Milliseconds between displayed generations
    #[arg(long)]
    interval_ms: Option<u64>,

    /// Log the run and print the final grid instead of opening a window
    #[arg(long)]
    headless: bool,
}

impl Cli {
    fn run_config(&self) -> Result<RunConfig> {
        let mut config = match &self.config {
            Some(path) => RunConfig::load(path)?,
            None => RunConfig::preset(self.preset),
        };

        if let Some(name) = &self.pattern {
            config.seed = Seed::Pattern { name: name.clone() };
        }
        if self.rng_seed.is_some() {
            config.rng_seed = self.rng_seed;
        }
        if let Some(iterations) = self.iterations {
            config.iterations = iterations;
        }
        if let Some(interval_ms) = self.interval_ms {
            config.interval_ms = interval_ms;
        }

        config.validate()?;
        Ok(config)
    }
}

fn report_cycle(cycle: Option<Cycle>) {
    match cycle {
        Some(cycle) if cycle.is_still() => {
            info!(generation = cycle.start, "grid stopped changing");
        }
        Some(cycle) => {
            info!(generation = cycle.start, period = cycle.period, "grid entered a cycle");
        }
        None => info!("no repeated generation within the run"),
    }
}

fn print_headless(snapshots: &[Grid]) {
    for (generation, grid) in snapshots.iter().enumerate() {
        debug!(generation, population = grid.population(), "generation");
    }
    if let Some(last) = snapshots.last() {
        println!("i = {}", snapshots.len() - 1);
        println!("{last}");
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "grid_display=info,conway=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = cli.run_config()?;

    let simulation = simulate(&config).context("failed to evolve grid")?;
    if let Some(seed) = simulation.rng_seed {
        info!(seed, "scatter seed, pass --rng-seed to replay");
    }

    let cycle = find_cycle(&simulation.snapshots);
    report_cycle(cycle);

    if cli.headless {
        print_headless(&simulation.snapshots);
        return Ok(());
    }

    let interval = Duration::from_millis(config.interval_ms);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 950.0]),
        ..Default::default()
    };

    info!(generations = simulation.snapshots.len(), "opening viewer");
    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(move |_cc| Box::new(ui::Player::new(simulation.snapshots, interval, cycle))),
    )
    .map_err(|e| anyhow!("viewer failed: {e}"))
}
