//! Extension strategy: bounded steps from a tree vertex toward a sample
//!
//! The step direction comes from an angular decomposition of the delta
//! (planar atan2 in 2-D, inclination/azimuth in 3-D), the step length from
//! the environment metric scaled by `eta` and clamped so the step never
//! passes the sample. Snapping to integer grid cells is the default for
//! discretized c-spaces; continuous extension is available as a policy.

use crate::common::{Config, Environment, PlannerError, PlannerResult};

/// Whether extended configurations are snapped to the integer grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapPolicy {
    /// Keep the extended configuration as computed.
    Continuous,
    /// Round every coordinate to the nearest integer grid cell.
    GridSnap,
}

/// Angular extend strategy for 2-D and 3-D configuration spaces.
#[derive(Debug, Clone)]
pub struct AngularExtend {
    dim: usize,
    eta: f64,
    snap: SnapPolicy,
}

impl AngularExtend {
    /// Create an extend strategy for a `dim`-dimensional c-space. Only 2-D
    /// and 3-D are supported by the angular decomposition.
    pub fn new(dim: usize, eta: f64, snap: SnapPolicy) -> PlannerResult<Self> {
        if dim != 2 && dim != 3 {
            return Err(PlannerError::InvalidDimension(dim));
        }
        Ok(Self { dim, eta, snap })
    }

    /// Step from `nearest` toward `target` by `eta * distance`, clamped to
    /// the distance itself so the step never overshoots the target.
    pub fn extend<E: Environment>(&self, env: &E, nearest: &Config, target: &Config) -> Config {
        let dist = env.compute_distance(nearest, target);
        let step = (self.eta * dist).min(dist);

        let mut new = match self.dim {
            2 => {
                let alpha = (target[1] - nearest[1]).atan2(target[0] - nearest[0]);
                Config::from_column_slice(&[
                    nearest[0] + step * alpha.cos(),
                    nearest[1] + step * alpha.sin(),
                ])
            }
            3 => {
                let planar =
                    ((target[0] - nearest[0]).powi(2) + (target[1] - nearest[1]).powi(2)).sqrt();
                let alpha = (target[2] - nearest[2]).atan2(planar);
                let beta = (target[1] - nearest[1]).atan2(target[0] - nearest[0]);
                Config::from_column_slice(&[
                    nearest[0] + step * alpha.cos() * beta.cos(),
                    nearest[1] + step * alpha.cos() * beta.sin(),
                    nearest[2] + step * alpha.sin(),
                ])
            }
            // Ruled out by the constructor.
            _ => unreachable!(),
        };

        if self.snap == SnapPolicy::GridSnap {
            for coord in new.iter_mut() {
                *coord = coord.round();
            }
        }

        new
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::config_from;
    use crate::environment::EuclideanEnv;

    fn env(dim: usize) -> EuclideanEnv {
        let bounds: Vec<(f64, f64)> = vec![(-100.0, 100.0); dim];
        EuclideanEnv::obstacle_free(&bounds, config_from(&vec![0.0; dim]), 1.0)
    }

    #[test]
    fn test_rejects_unsupported_dimension() {
        assert_eq!(
            AngularExtend::new(4, 1.0, SnapPolicy::Continuous).unwrap_err(),
            PlannerError::InvalidDimension(4)
        );
        assert!(AngularExtend::new(2, 1.0, SnapPolicy::GridSnap).is_ok());
        assert!(AngularExtend::new(3, 1.0, SnapPolicy::GridSnap).is_ok());
    }

    #[test]
    fn test_full_step_reaches_target_2d() {
        let env = env(2);
        let extend = AngularExtend::new(2, 1.0, SnapPolicy::Continuous).unwrap();
        let nearest = config_from(&[0.0, 0.0]);
        let target = config_from(&[3.0, 4.0]);
        let new = extend.extend(&env, &nearest, &target);
        assert!((new[0] - 3.0).abs() < 1e-10);
        assert!((new[1] - 4.0).abs() < 1e-10);
    }

    #[test]
    fn test_partial_step_scales_by_eta() {
        let env = env(2);
        let extend = AngularExtend::new(2, 0.5, SnapPolicy::Continuous).unwrap();
        let nearest = config_from(&[0.0, 0.0]);
        let target = config_from(&[10.0, 0.0]);
        let new = extend.extend(&env, &nearest, &target);
        assert!((new[0] - 5.0).abs() < 1e-10);
        assert!(new[1].abs() < 1e-10);
    }

    #[test]
    fn test_step_never_overshoots_target() {
        let env = env(2);
        // eta > 1 must still be clamped to the sample distance.
        let extend = AngularExtend::new(2, 3.0, SnapPolicy::Continuous).unwrap();
        let nearest = config_from(&[1.0, 1.0]);
        let target = config_from(&[4.0, 5.0]);
        let new = extend.extend(&env, &nearest, &target);
        let step = env.compute_distance(&nearest, &new);
        let dist = env.compute_distance(&nearest, &target);
        assert!(step <= dist + 1e-10);
        assert!(step <= 3.0 * dist + 1e-10);
    }

    #[test]
    fn test_step_length_bounded_by_eta_times_distance() {
        let env = env(3);
        let extend = AngularExtend::new(3, 0.7, SnapPolicy::Continuous).unwrap();
        let nearest = config_from(&[0.0, 0.0, 0.0]);
        let target = config_from(&[2.0, -3.0, 6.0]);
        let new = extend.extend(&env, &nearest, &target);
        let step = env.compute_distance(&nearest, &new);
        let dist = env.compute_distance(&nearest, &target);
        assert!(step <= 0.7 * dist + 1e-10);
    }

    #[test]
    fn test_spherical_decomposition_3d() {
        let env = env(3);
        let extend = AngularExtend::new(3, 1.0, SnapPolicy::Continuous).unwrap();
        let nearest = config_from(&[0.0, 0.0, 0.0]);
        let target = config_from(&[1.0, 2.0, 2.0]);
        let new = extend.extend(&env, &nearest, &target);
        assert!((new[0] - 1.0).abs() < 1e-10);
        assert!((new[1] - 2.0).abs() < 1e-10);
        assert!((new[2] - 2.0).abs() < 1e-10);
    }

    #[test]
    fn test_grid_snap_rounds_coordinates() {
        let env = env(2);
        let extend = AngularExtend::new(2, 1.0, SnapPolicy::GridSnap).unwrap();
        let nearest = config_from(&[0.0, 0.0]);
        let target = config_from(&[1.4, 2.6]);
        let new = extend.extend(&env, &nearest, &target);
        assert_eq!(new[0], 1.0);
        assert_eq!(new[1], 3.0);
    }
}
