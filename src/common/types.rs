//! Common types used throughout rrt_star_planner

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use nalgebra::DVector;

/// A point in configuration space. Dynamically sized so the same planner
/// handles 2-D and 3-D c-spaces (and higher, given an extend strategy).
pub type Config = DVector<f64>;

/// Stable identifier of a tree vertex. Assigned sequentially at insertion,
/// starting at 0 for the root; never reused or renumbered.
pub type VertexId = usize;

/// Build a configuration from a coordinate slice.
pub fn config_from(coords: &[f64]) -> Config {
    DVector::from_column_slice(coords)
}

/// Result of a successful planning run: the start-to-goal sequence of
/// configurations plus the run's side channels.
#[derive(Debug, Clone)]
pub struct PlannedPath {
    pub configs: Vec<Config>,
    /// Sum of consecutive segment distances, accumulated in path order.
    pub cost: f64,
    /// Wall-clock time spent inside `plan`.
    pub elapsed: Duration,
}

impl PlannedPath {
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }

    pub fn first(&self) -> Option<&Config> {
        self.configs.first()
    }

    pub fn last(&self) -> Option<&Config> {
        self.configs.last()
    }
}

/// Clonable cancellation flag, checked once per planner iteration.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    flag: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.flag.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::Relaxed)
    }
}
