//! Common types, traits, and error definitions for rrt_star_planner
//!
//! This module provides the foundational building blocks shared by the
//! tree, cost and planner modules.

pub mod error;
pub mod traits;
pub mod types;

pub use error::*;
pub use traits::*;
pub use types::*;
