//! RRT* planner
//!
//! Grows a tree of collision-free configurations from the start, picking
//! the minimum-cost parent for every new vertex and rewiring radius
//! neighbors through it whenever that strictly lowers their cost-to-root.
//! Asymptotically optimal; a single run is sequential and owns its tree.

use std::time::Instant;

use itertools::Itertools;
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::common::{
    CancelToken, Config, Environment, MotionPlanner, PlannedPath, PlannerError, PlannerResult,
    VertexId,
};
use crate::cost::cost_to_root;
use crate::extend::{AngularExtend, SnapPolicy};
use crate::tree::SpatialTree;

/// Configuration for the RRT* planner
#[derive(Debug, Clone)]
pub struct RRTStarConfig {
    /// Probability of sampling the goal configuration directly
    pub bias: f64,
    /// Step-scale factor for tree extension
    pub eta: f64,
    /// Maximum outer iterations
    pub max_iterations: usize,
    /// Radius for neighbor queries during parent selection and rewiring
    pub rewire_radius: f64,
    /// Goal-criterion check cadence, in iterations
    pub goal_check_period: usize,
    /// Retry cap for finding a valid nearest-neighbor edge per iteration
    pub max_sample_retries: usize,
    /// Consecutive capped iterations tolerated before giving up
    pub max_stalled_iterations: usize,
    /// Whether extended configurations snap to the integer grid
    pub snap: SnapPolicy,
    /// Seed for the planner-owned RNG
    pub rand_seed: u64,
}

impl Default for RRTStarConfig {
    fn default() -> Self {
        Self {
            bias: 0.05,
            eta: 1.0,
            max_iterations: 10_000,
            rewire_radius: 10.0,
            goal_check_period: 600,
            max_sample_retries: 100,
            max_stalled_iterations: 50,
            snap: SnapPolicy::GridSnap,
            rand_seed: 0,
        }
    }
}

/// RRT* path planner over an arbitrary `Environment`
#[derive(Debug)]
pub struct RRTStarPlanner<E: Environment> {
    env: E,
    config: RRTStarConfig,
    extend: AngularExtend,
    tree: SpatialTree,
    rng: StdRng,
    cancel: CancelToken,
}

impl<E: Environment> RRTStarPlanner<E> {
    /// Create a planner. Fails with `InvalidDimension` if the extend
    /// strategy does not support the environment's c-space dimension.
    pub fn new(env: E, config: RRTStarConfig) -> PlannerResult<Self> {
        let extend = AngularExtend::new(env.c_space_dim(), config.eta, config.snap)?;
        let rng = StdRng::seed_from_u64(config.rand_seed);
        Ok(Self {
            env,
            config,
            extend,
            tree: SpatialTree::new(),
            rng,
            cancel: CancelToken::new(),
        })
    }

    /// Token for aborting a run from another thread. Checked once per
    /// outer iteration.
    pub fn cancel_token(&self) -> CancelToken {
        self.cancel.clone()
    }

    /// The tree built during the most recent `plan` call.
    pub fn tree(&self) -> &SpatialTree {
        &self.tree
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    /// Plan a path from `start` to `goal`. Deterministic for a fixed seed
    /// and environment: the RNG is re-seeded on every call.
    pub fn plan(&mut self, start: &Config, goal: &Config) -> PlannerResult<PlannedPath> {
        let started = Instant::now();
        self.rng = StdRng::seed_from_u64(self.config.rand_seed);
        self.tree = SpatialTree::new();

        // Seeding: the start configuration becomes the root (id 0).
        self.tree.add_vertex(start.clone());

        let mut goal_vertex: Option<VertexId> = None;
        let mut stalled_iterations = 0;

        for iteration in 1..=self.config.max_iterations {
            if self.cancel.is_cancelled() {
                return Err(PlannerError::Cancelled);
            }

            // Goal-biased sampling with a bounded retry loop: keep drawing
            // until the straight edge between the sample and its nearest
            // vertex is collision-free.
            let mut picked = None;
            for _ in 0..self.config.max_sample_retries {
                let x_rand = self.sample_target(goal);
                if let Some((nearest_id, _)) = self.tree.nearest_vertex(&self.env, &x_rand) {
                    if self
                        .env
                        .edge_validity_checker(&x_rand, self.tree.config(nearest_id))
                    {
                        picked = Some((x_rand, nearest_id));
                        break;
                    }
                }
            }
            let (x_rand, nearest_id) = match picked {
                Some(found) => {
                    stalled_iterations = 0;
                    found
                }
                None => {
                    stalled_iterations += 1;
                    if stalled_iterations >= self.config.max_stalled_iterations {
                        return Err(PlannerError::StalledSampling);
                    }
                    continue;
                }
            };

            let x_new = self
                .extend
                .extend(&self.env, self.tree.config(nearest_id), &x_rand);

            let neighbor_ids =
                self.tree
                    .neighbors_within_radius(&self.env, &x_new, self.config.rewire_radius);

            // Parent selection: minimum-cost valid parent among the
            // nearest vertex and all radius neighbors, ties to the lowest
            // id. This is the defining RRT* improvement over plain RRT.
            let nearest_cost = cost_to_root(&self.tree, &self.env, nearest_id)?
                + self
                    .env
                    .compute_distance(self.tree.config(nearest_id), &x_new);
            let mut best = (OrderedFloat(nearest_cost), nearest_id);
            for &near_id in &neighbor_ids {
                if !self
                    .env
                    .edge_validity_checker(&x_new, self.tree.config(near_id))
                {
                    continue;
                }
                let cand = cost_to_root(&self.tree, &self.env, near_id)?
                    + self
                        .env
                        .compute_distance(self.tree.config(near_id), &x_new);
                let key = (OrderedFloat(cand), near_id);
                if key < best {
                    best = key;
                }
            }
            let parent_id = best.1;

            let new_id = self.tree.add_vertex(x_new.clone());
            self.tree.add_edge(parent_id, new_id);

            // Rewire: re-parent any neighbor whose cost-to-root strictly
            // improves through the new vertex. The strict inequality is
            // what rules out cycles; an ancestor of the new vertex can
            // never satisfy it.
            let new_cost = cost_to_root(&self.tree, &self.env, new_id)?;
            for &near_id in &neighbor_ids {
                if near_id == parent_id {
                    continue;
                }
                let near_config = self.tree.config(near_id).clone();
                if !self.env.edge_validity_checker(&x_new, &near_config) {
                    continue;
                }
                let through_new = new_cost + self.env.compute_distance(&x_new, &near_config);
                if through_new < cost_to_root(&self.tree, &self.env, near_id)? {
                    self.tree.add_edge(new_id, near_id);
                }
            }

            if iteration % self.config.goal_check_period == 0 {
                if let Some(vertex_id) = self.nearest_goal_vertex(goal) {
                    goal_vertex = Some(vertex_id);
                    break;
                }
            }
        }

        // One last check so a shorter iteration budget cannot miss a
        // vertex that already satisfies the goal criterion.
        if let Some(vertex_id) = self.nearest_goal_vertex(goal) {
            goal_vertex = Some(vertex_id);
        }

        match goal_vertex {
            Some(vertex_id) => self.reconstruct_path(vertex_id, started),
            None => Err(PlannerError::NoPathFound),
        }
    }

    fn sample_target(&mut self, goal: &Config) -> Config {
        if self.rng.gen::<f64>() < self.config.bias {
            goal.clone()
        } else {
            self.env.sample(&mut self.rng)
        }
    }

    /// Nearest vertex to the goal, if it satisfies the goal criterion.
    fn nearest_goal_vertex(&self, goal: &Config) -> Option<VertexId> {
        let (vertex_id, _) = self.tree.nearest_vertex(&self.env, goal)?;
        if self.env.goal_criterion(self.tree.config(vertex_id)) {
            Some(vertex_id)
        } else {
            None
        }
    }

    /// Walk parent edges back to the root, reverse into start-to-goal
    /// order, and accumulate cost left-to-right along the path.
    fn reconstruct_path(
        &self,
        goal_vertex: VertexId,
        started: Instant,
    ) -> PlannerResult<PlannedPath> {
        let mut configs = Vec::new();
        let mut current = goal_vertex;
        let mut steps = 0;
        loop {
            configs.push(self.tree.config(current).clone());
            match self.tree.parent(current) {
                Some(parent) => current = parent,
                None => break,
            }
            steps += 1;
            if steps > self.tree.len() {
                return Err(PlannerError::CycleDetected(goal_vertex));
            }
        }
        configs.reverse();

        let cost = configs
            .iter()
            .tuple_windows()
            .map(|(a, b)| self.env.compute_distance(a, b))
            .sum();

        Ok(PlannedPath {
            configs,
            cost,
            elapsed: started.elapsed(),
        })
    }
}

impl<E: Environment> MotionPlanner for RRTStarPlanner<E> {
    fn plan(&mut self, start: &Config, goal: &Config) -> PlannerResult<PlannedPath> {
        RRTStarPlanner::plan(self, start, goal)
    }
}
