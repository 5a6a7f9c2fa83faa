//! Euclidean environment with sphere obstacles
//!
//! Concrete `Environment` used by the demo binary and the tests:
//! axis-aligned bounds per dimension, circular (2-D) or spherical (3-D)
//! obstacles, Euclidean metric.

use rand::rngs::StdRng;
use rand::Rng;

use crate::common::{Config, Environment};

/// Circular/spherical obstacle: center plus radius.
#[derive(Debug, Clone)]
pub struct SphereObstacle {
    pub center: Config,
    pub radius: f64,
}

impl SphereObstacle {
    pub fn new(center: Config, radius: f64) -> Self {
        Self { center, radius }
    }

    /// Distance from the obstacle center to the segment `a`-`b`
    /// (projection onto the segment, clamped to its endpoints).
    fn distance_to_segment(&self, a: &Config, b: &Config) -> f64 {
        let ab = b - a;
        let ap = &self.center - a;
        let ab_len2 = ab.norm_squared();
        let t = if ab_len2 > 0.0 {
            (ap.dot(&ab) / ab_len2).clamp(0.0, 1.0)
        } else {
            0.0
        };
        (ap - ab * t).norm()
    }
}

/// Bounded Euclidean free space, optionally populated with obstacles.
#[derive(Debug, Clone)]
pub struct EuclideanEnv {
    bounds: Vec<(f64, f64)>,
    obstacles: Vec<SphereObstacle>,
    goal: Config,
    goal_tolerance: f64,
}

impl EuclideanEnv {
    /// `bounds` holds one `(min, max)` pair per dimension; its length
    /// fixes the c-space dimensionality.
    pub fn new(
        bounds: &[(f64, f64)],
        obstacles: Vec<SphereObstacle>,
        goal: Config,
        goal_tolerance: f64,
    ) -> Self {
        Self {
            bounds: bounds.to_vec(),
            obstacles,
            goal,
            goal_tolerance,
        }
    }

    pub fn obstacle_free(bounds: &[(f64, f64)], goal: Config, goal_tolerance: f64) -> Self {
        Self::new(bounds, Vec::new(), goal, goal_tolerance)
    }

    pub fn obstacles(&self) -> &[SphereObstacle] {
        &self.obstacles
    }

    pub fn bounds(&self) -> &[(f64, f64)] {
        &self.bounds
    }

    fn in_bounds(&self, config: &Config) -> bool {
        config
            .iter()
            .zip(self.bounds.iter())
            .all(|(&coord, &(min, max))| coord >= min && coord <= max)
    }
}

impl Environment for EuclideanEnv {
    fn compute_distance(&self, a: &Config, b: &Config) -> f64 {
        (a - b).norm()
    }

    fn edge_validity_checker(&self, a: &Config, b: &Config) -> bool {
        if !self.in_bounds(a) || !self.in_bounds(b) {
            return false;
        }
        self.obstacles
            .iter()
            .all(|obs| obs.distance_to_segment(a, b) > obs.radius)
    }

    fn goal_criterion(&self, config: &Config) -> bool {
        self.compute_distance(config, &self.goal) <= self.goal_tolerance
    }

    fn sample(&self, rng: &mut StdRng) -> Config {
        let coords: Vec<f64> = self
            .bounds
            .iter()
            .map(|&(min, max)| rng.gen_range(min..=max))
            .collect();
        Config::from_vec(coords)
    }

    fn c_space_dim(&self) -> usize {
        self.bounds.len()
    }
}
