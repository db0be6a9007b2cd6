//! Random walk that avoids revisiting cells.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::Rng;

use crate::core::{GridCoord, Move, Pose};
use crate::exploration::record_sensed_obstacles;
use crate::render::Plotter;
use crate::world::Environment;

use super::{move_from_index, perform_move, Strategy};

/// Random walk with position memory.
///
/// Behaves like [`RandomStrategy`](super::RandomStrategy), except every
/// occupied cell is remembered and a previously visited front cell also
/// forces a turn. The robot can still revisit cells (turning in place
/// until every exit is visited leaves only visited exits), but it
/// strongly prefers fresh ground.
pub struct NoBacktrackStrategy {
    found: HashSet<GridCoord>,
    visited: HashSet<GridCoord>,
    pending: Option<Move>,
    rng: StdRng,
}

impl NoBacktrackStrategy {
    /// Create a new no-backtrack walk driven by `rng`.
    pub fn new(rng: StdRng) -> Self {
        Self {
            found: HashSet::new(),
            visited: HashSet::new(),
            pending: None,
            rng,
        }
    }

    /// Obstacles confirmed so far.
    pub fn found_obstacles(&self) -> &HashSet<GridCoord> {
        &self.found
    }
}

impl Strategy for NoBacktrackStrategy {
    fn sense(&mut self, env: &mut dyn Environment) {
        let pose = Pose::new(env.position(), env.heading());
        record_sensed_obstacles(&mut self.found, env.read_sensor(), pose.surroundings());

        self.visited.insert(pose.position);

        if self.found.len() == env.obstacle_count() {
            tracing::info!("all {} obstacles found", self.found.len());
            env.stop();
        }
    }

    fn plan(&mut self, env: &mut dyn Environment) {
        let pose = Pose::new(env.position(), env.heading());
        let front = pose.front_cell();

        let front_blocked = self.found.contains(&front)
            || !front.in_bounds(env.grid_width(), env.grid_height())
            || self.visited.contains(&front);

        self.pending = Some(if front_blocked {
            move_from_index(self.rng.random_range(0..2))
        } else {
            move_from_index(self.rng.random_range(0..3))
        });
    }

    fn act(&mut self, env: &mut dyn Environment) {
        if let Some(mv) = self.pending.take() {
            perform_move(env, mv);
        }
    }

    fn plot(&self, plotter: &mut dyn Plotter) {
        plotter.plot(&self.found);
    }
}
