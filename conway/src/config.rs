// config.rs - Run configuration loaded from TOML or presets

//! Run configuration.
//!
//! A run is described by a TOML file or built from one of the presets that
//! mirror the classic random-start setups:
//!
//! ```toml
//! rows = 50
//! cols = 50
//! iterations = 100
//! interval_ms = 100
//! rng_seed = 42
//!
//! [seed]
//! kind = "scatter"
//! live_cells = 500
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How the initial grid is populated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Seed {
    /// Mark `live_cells` uniformly drawn cells alive (with replacement).
    Scatter { live_cells: usize },
    /// Centre a named pattern from [`PATTERNS`](crate::patterns::PATTERNS).
    Pattern { name: String },
}

/// Everything needed to produce and play a snapshot sequence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunConfig {
    pub rows: usize,
    pub cols: usize,
    pub seed: Seed,
    /// Seed for the scatter generator; drawn at random when absent.
    #[serde(default)]
    pub rng_seed: Option<u64>,
    /// Number of snapshots, including the initial grid. Kept signed so that
    /// a negative value in a file is reported as an invalid argument rather
    /// than a parse failure.
    pub iterations: i64,
    /// Delay between displayed snapshots.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

fn default_interval_ms() -> u64 {
    100
}

/// Errors raised while loading or validating a [`RunConfig`].
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(&'static str),

    #[error("unknown preset `{0}`, expected `life` or `maze`")]
    UnknownPreset(String),
}

/// Built-in run setups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    /// 50x50 grid, 500 scattered cells, 100 generations.
    #[default]
    Life,
    /// 40x40 grid, 500 scattered cells, 70 generations. The denser start
    /// tends to freeze into maze-like walls.
    Maze,
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "life" => Ok(Self::Life),
            "maze" => Ok(Self::Maze),
            _ => Err(ConfigError::UnknownPreset(s.to_owned())),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Life => "life",
            Self::Maze => "maze",
        })
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        Self::preset(Preset::default())
    }
}

impl RunConfig {
    #[must_use]
    pub fn preset(preset: Preset) -> Self {
        let (size, iterations) = match preset {
            Preset::Life => (50, 100),
            Preset::Maze => (40, 70),
        };
        Self {
            rows: size,
            cols: size,
            seed: Seed::Scatter { live_cells: 500 },
            rng_seed: None,
            iterations,
            interval_ms: default_interval_ms(),
        }
    }

    /// Reads and validates a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        text.parse()
    }

    /// Checks the fields that no later stage would reject on its own.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for zero dimensions or a zero interval.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::Invalid("rows and cols must be at least 1"));
        }
        if self.interval_ms == 0 {
            return Err(ConfigError::Invalid("interval_ms must be positive"));
        }
        Ok(())
    }
}

impl FromStr for RunConfig {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }
}
