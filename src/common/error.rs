//! Error types for rrt_star_planner

use std::fmt;

use crate::common::types::VertexId;

/// Main error type for planning operations
#[derive(Debug, Clone, PartialEq)]
pub enum PlannerError {
    /// Iteration budget exhausted without satisfying the goal criterion.
    /// Recoverable: retry with a larger budget or a different seed.
    NoPathFound,
    /// Cost evaluation walked more parent edges than the tree holds
    /// vertices. Indicates a corrupted rewire; fatal.
    CycleDetected(VertexId),
    /// The extend strategy only supports 2-D and 3-D configuration
    /// spaces. Raised at construction time.
    InvalidDimension(usize),
    /// Too many consecutive iterations failed to produce a valid
    /// nearest-neighbor edge within the retry cap.
    StalledSampling,
    /// The cancellation token was triggered.
    Cancelled,
}

impl fmt::Display for PlannerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlannerError::NoPathFound => {
                write!(f, "no path found within the iteration budget")
            }
            PlannerError::CycleDetected(id) => {
                write!(f, "cycle detected while computing cost of vertex {}", id)
            }
            PlannerError::InvalidDimension(dim) => {
                write!(f, "unsupported c-space dimension: {} (expected 2 or 3)", dim)
            }
            PlannerError::StalledSampling => {
                write!(f, "sampling stalled: no valid nearest-neighbor edge found")
            }
            PlannerError::Cancelled => write!(f, "planning cancelled"),
        }
    }
}

impl std::error::Error for PlannerError {}

/// Result type alias for planning operations
pub type PlannerResult<T> = Result<T, PlannerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PlannerError::NoPathFound;
        assert_eq!(
            format!("{}", err),
            "no path found within the iteration budget"
        );
    }

    #[test]
    fn test_cycle_display_names_vertex() {
        let err = PlannerError::CycleDetected(17);
        assert!(format!("{}", err).contains("17"));
    }

    #[test]
    fn test_invalid_dimension_display() {
        let err = PlannerError::InvalidDimension(5);
        assert!(format!("{}", err).contains('5'));
    }
}
