//! Common traits defining the seams of the planning core

use rand::rngs::StdRng;

use crate::common::error::PlannerResult;
use crate::common::types::{Config, PlannedPath};

/// Environment collaborator: map representation, collision checking and
/// free-space sampling live outside the planning core behind this trait.
pub trait Environment {
    /// Metric distance between two configurations. Must satisfy the
    /// triangle inequality for radius-query correctness.
    fn compute_distance(&self, a: &Config, b: &Config) -> f64;

    /// True if the straight-line segment between `a` and `b` is
    /// collision-free and in bounds.
    fn edge_validity_checker(&self, a: &Config, b: &Config) -> bool;

    /// True if `config` is acceptably close to the goal.
    fn goal_criterion(&self, config: &Config) -> bool;

    /// Draw a uniformly random configuration from free space. The RNG is
    /// owned by the caller so runs stay reproducible.
    fn sample(&self, rng: &mut StdRng) -> Config;

    /// Dimensionality of the configuration space.
    fn c_space_dim(&self) -> usize;
}

/// Trait for sampling-based motion planners
pub trait MotionPlanner {
    /// Plan a collision-free path from start to goal.
    fn plan(&mut self, start: &Config, goal: &Config) -> PlannerResult<PlannedPath>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::types::config_from;

    struct FreeSpace(usize);

    impl Environment for FreeSpace {
        fn compute_distance(&self, a: &Config, b: &Config) -> f64 {
            (a - b).norm()
        }

        fn edge_validity_checker(&self, _a: &Config, _b: &Config) -> bool {
            true
        }

        fn goal_criterion(&self, _config: &Config) -> bool {
            false
        }

        fn sample(&self, _rng: &mut StdRng) -> Config {
            config_from(&vec![0.0; self.0])
        }

        fn c_space_dim(&self) -> usize {
            self.0
        }
    }

    #[test]
    fn test_environment_trait_object_safe() {
        let env: Box<dyn Environment> = Box::new(FreeSpace(2));
        let a = config_from(&[0.0, 0.0]);
        let b = config_from(&[3.0, 4.0]);
        assert!((env.compute_distance(&a, &b) - 5.0).abs() < 1e-10);
        assert_eq!(env.c_space_dim(), 2);
    }
}
