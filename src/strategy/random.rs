//! Uniform random walk strategy.

use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::Rng;

use crate::core::{GridCoord, Move, Pose};
use crate::exploration::record_sensed_obstacles;
use crate::render::Plotter;
use crate::world::Environment;

use super::{move_from_index, perform_move, Strategy};

/// Picks a random move each tick.
///
/// When the front cell is a known obstacle or outside the grid the draw
/// is restricted to the two turns, so the robot never walks into a known
/// obstacle or off the edge.
pub struct RandomStrategy {
    found: HashSet<GridCoord>,
    pending: Option<Move>,
    rng: StdRng,
}

impl RandomStrategy {
    /// Create a new random walk driven by `rng`.
    pub fn new(rng: StdRng) -> Self {
        Self {
            found: HashSet::new(),
            pending: None,
            rng,
        }
    }

    /// Obstacles confirmed so far.
    pub fn found_obstacles(&self) -> &HashSet<GridCoord> {
        &self.found
    }
}

impl Strategy for RandomStrategy {
    fn sense(&mut self, env: &mut dyn Environment) {
        let pose = Pose::new(env.position(), env.heading());
        record_sensed_obstacles(&mut self.found, env.read_sensor(), pose.surroundings());

        if self.found.len() == env.obstacle_count() {
            tracing::info!("all {} obstacles found", self.found.len());
            env.stop();
        }
    }

    fn plan(&mut self, env: &mut dyn Environment) {
        let pose = Pose::new(env.position(), env.heading());
        let front = pose.front_cell();

        let front_blocked = self.found.contains(&front)
            || !front.in_bounds(env.grid_width(), env.grid_height());

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Heading;
    use crate::world::GridWorld;
    use rand::SeedableRng;

    #[test]
    fn test_turns_only_when_front_blocked() {
        // Robot boxed in at the corner facing off-grid: every planned
        // move must be a turn.
        let mut world = GridWorld::with_obstacles(3, 3, [GridCoord::new(1, 1)]);
        world.set_robot(Pose::new(GridCoord::new(0, 0), Heading::West));

        let mut strategy = RandomStrategy::new(StdRng::seed_from_u64(1));
        for _ in 0..20 {
            strategy.plan(&mut world);
            let mv = strategy.pending.expect("plan always picks a move");
            assert_ne!(mv, Move::MoveForward);
        }
    }

    #[test]
    fn test_act_performs_exactly_one_move() {
        let mut world = GridWorld::with_obstacles(3, 3, [GridCoord::new(2, 2)]);
        let mut strategy = RandomStrategy::new(StdRng::seed_from_u64(2));

        strategy.sense(&mut world);
        strategy.plan(&mut world);
        let before = world.robot();
        strategy.act(&mut world);
        let after = world.robot();
        assert_ne!(before, after);

        // Without a fresh plan, act is a no-op.
        strategy.act(&mut world);
        assert_eq!(world.robot(), after);
    }

    #[test]
    fn test_stops_once_all_obstacles_found() {
        // Single obstacle right next to the start cell; the first sense
        // sees it and stops the run.
        let mut world = GridWorld::with_obstacles(3, 3, [GridCoord::new(0, 1)]);
        world.set_robot(Pose::new(GridCoord::new(0, 0), Heading::North));

        let mut strategy = RandomStrategy::new(StdRng::seed_from_u64(3));
        strategy.sense(&mut world);
        assert!(world.is_stopped());
        assert!(strategy.found_obstacles().contains(&GridCoord::new(0, 1)));
    }
}
