// cycle.rs - Detect when a snapshot sequence starts repeating

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::Grid;

/// A repetition found in a snapshot sequence: generation `start + period`
/// is identical to generation `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cycle {
    pub start: usize,
    pub period: usize,
}

impl Cycle {
    /// A period of one means the grid stopped changing.
    #[must_use]
    pub fn is_still(&self) -> bool {
        self.period == 1
    }
}

fn hash_grid(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.hash(&mut hasher);
    hasher.finish()
}

/// Returns the first repetition in `snapshots`, if any.
///
/// Grids are bucketed by hash and compared in full, so a hash collision can
/// never report a false cycle.
#[must_use]
pub fn find_cycle(snapshots: &[Grid]) -> Option<Cycle> {
    let mut seen: HashMap<u64, Vec<usize>> = HashMap::new();
    for (generation, grid) in snapshots.iter().enumerate() {
        let bucket = seen.entry(hash_grid(grid)).or_default();
        if let Some(&start) = bucket.iter().find(|&&earlier| snapshots[earlier] == *grid) {
            return Some(Cycle {
                start,
                period: generation - start,
            });
        }
        bucket.push(generation);
    }
    None
}
