//! Spatial tree holding the planner's vertices and parent edges
//!
//! Vertices are addressed by sequential ids and never removed. Queries are
//! linear scans under the environment's metric, which keeps the candidate
//! sets exact and the iteration order deterministic.

use crate::common::{Config, Environment, VertexId};

/// Tree of configurations with a single parent edge per non-root vertex.
#[derive(Debug, Clone, Default)]
pub struct SpatialTree {
    vertices: Vec<Config>,
    parents: Vec<Option<VertexId>>,
}

impl SpatialTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new vertex and return its id. The first vertex added
    /// becomes the root (id 0). No validity checks are performed here;
    /// collision checking is the caller's responsibility.
    pub fn add_vertex(&mut self, config: Config) -> VertexId {
        let id = self.vertices.len();
        self.vertices.push(config);
        self.parents.push(None);
        id
    }

    /// Set or overwrite the parent of `child_id`. Later calls replace the
    /// previous parent (rewiring). No cycle detection is performed here;
    /// the rewire rule's strict cost decrease is what keeps the structure
    /// a tree.
    pub fn add_edge(&mut self, parent_id: VertexId, child_id: VertexId) {
        self.parents[child_id] = Some(parent_id);
    }

    pub fn root_id(&self) -> VertexId {
        0
    }

    pub fn parent(&self, id: VertexId) -> Option<VertexId> {
        self.parents[id]
    }

    pub fn config(&self, id: VertexId) -> &Config {
        &self.vertices[id]
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Iterate over `(id, parent_id)` pairs for all non-root vertices.
    pub fn edges(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.parents
            .iter()
            .enumerate()
            .filter_map(|(id, parent)| parent.map(|p| (id, p)))
    }

    /// Vertex minimizing distance to `query`, with that distance. Strict
    /// less-than comparison in insertion order resolves ties to the lowest
    /// id. Returns `None` on an empty tree.
    pub fn nearest_vertex<E: Environment>(
        &self,
        env: &E,
        query: &Config,
    ) -> Option<(VertexId, f64)> {
        let mut best: Option<(VertexId, f64)> = None;
        for (id, config) in self.vertices.iter().enumerate() {
            let dist = env.compute_distance(query, config);
            match best {
                Some((_, best_dist)) if dist >= best_dist => {}
                _ => best = Some((id, dist)),
            }
        }
        best
    }

    /// All vertex ids with distance ≤ `radius` from `query`, in ascending
    /// id order. Configurations are retrievable index-for-index through
    /// `config`.
    pub fn neighbors_within_radius<E: Environment>(
        &self,
        env: &E,
        query: &Config,
        radius: f64,
    ) -> Vec<VertexId> {
        self.vertices
            .iter()
            .enumerate()
            .filter_map(|(id, config)| {
                if env.compute_distance(query, config) <= radius {
                    Some(id)
                } else {
                    None
                }
            })
            .collect()
    }
}
