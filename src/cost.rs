//! Cost-to-root evaluation
//!
//! Cost is not cached per vertex: it is recomputed by walking parent edges,
//! so a rewire immediately affects every descendant without bookkeeping.
//! The walk is bounded by the vertex count to turn a corrupted rewire into
//! an error instead of an infinite loop.

use crate::common::{Environment, PlannerError, PlannerResult, VertexId};
use crate::tree::SpatialTree;

/// Sum of segment distances along the parent chain from `id` to the root.
/// Zero for the root itself. Fails with `CycleDetected` if the walk does
/// not reach the root within `tree.len()` steps.
pub fn cost_to_root<E: Environment>(
    tree: &SpatialTree,
    env: &E,
    id: VertexId,
) -> PlannerResult<f64> {
    let root = tree.root_id();
    let mut cost = 0.0;
    let mut current = id;
    let mut steps = 0;

    while current != root {
        let parent = match tree.parent(current) {
            Some(parent) => parent,
            // A detached vertex can only come from a rewiring bug.
            None => return Err(PlannerError::CycleDetected(id)),
        };
        cost += env.compute_distance(tree.config(current), tree.config(parent));
        current = parent;

        steps += 1;
        if steps > tree.len() {
            return Err(PlannerError::CycleDetected(id));
        }
    }

    Ok(cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::config_from;
    use crate::environment::EuclideanEnv;

    fn test_env() -> EuclideanEnv {
        EuclideanEnv::obstacle_free(
            &[(-100.0, 100.0), (-100.0, 100.0)],
            config_from(&[0.0, 0.0]),
            1.0,
        )
    }

    #[test]
    fn test_root_cost_is_zero() {
        let env = test_env();
        let mut tree = SpatialTree::new();
        tree.add_vertex(config_from(&[0.0, 0.0]));
        assert_eq!(cost_to_root(&tree, &env, 0).unwrap(), 0.0);
    }

    #[test]
    fn test_cost_sums_segment_distances() {
        let env = test_env();
        let mut tree = SpatialTree::new();
        tree.add_vertex(config_from(&[0.0, 0.0]));
        tree.add_vertex(config_from(&[3.0, 4.0]));
        tree.add_vertex(config_from(&[3.0, 10.0]));
        tree.add_edge(0, 1);
        tree.add_edge(1, 2);

        assert!((cost_to_root(&tree, &env, 1).unwrap() - 5.0).abs() < 1e-12);
        assert!((cost_to_root(&tree, &env, 2).unwrap() - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_cycle_is_detected() {
        let env = test_env();
        let mut tree = SpatialTree::new();
        tree.add_vertex(config_from(&[0.0, 0.0]));
        tree.add_vertex(config_from(&[1.0, 0.0]));
        tree.add_vertex(config_from(&[2.0, 0.0]));
        // 1 -> 2 -> 1 never reaches the root.
        tree.add_edge(2, 1);
        tree.add_edge(1, 2);

        assert_eq!(
            cost_to_root(&tree, &env, 1),
            Err(PlannerError::CycleDetected(1))
        );
    }

    #[test]
    fn test_detached_vertex_is_an_error() {
        let env = test_env();
        let mut tree = SpatialTree::new();
        tree.add_vertex(config_from(&[0.0, 0.0]));
        tree.add_vertex(config_from(&[1.0, 0.0]));
        // No edge added for vertex 1.
        assert_eq!(
            cost_to_root(&tree, &env, 1),
            Err(PlannerError::CycleDetected(1))
        );
    }
}
