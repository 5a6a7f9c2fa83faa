//! rrt_star_planner - sampling-based motion planning with RRT*
//!
//! This crate grows a tree of collision-free configurations over an
//! arbitrary-dimensional configuration space, rewiring it as it grows so
//! path costs approach the optimum as iterations accumulate. Collision
//! checking, sampling and the distance metric live behind the
//! `Environment` trait.

// Core modules
pub mod common;

// Planning modules
pub mod cost;
pub mod environment;
pub mod extend;
pub mod planner;
pub mod tree;

// Re-export common types for convenience
pub use common::{config_from, CancelToken, Config, PlannedPath, VertexId};
pub use common::{Environment, MotionPlanner};
pub use common::{PlannerError, PlannerResult};
pub use environment::{EuclideanEnv, SphereObstacle};
pub use extend::{AngularExtend, SnapPolicy};
pub use planner::{RRTStarConfig, RRTStarPlanner};
pub use tree::SpatialTree;
