//! Deterministic frontier exploration strategy.
//!
//! The only strategy with a termination guarantee. Each tick it senses,
//! keeps or recomputes a planned route, and executes one move:
//!
//! 1. The frontier selector picks the most informative, nearest
//!    unexplored viewpoint.
//! 2. The pose-space A* planner turns that viewpoint into a move queue.
//! 3. One move is dequeued per tick.
//!
//! The queue is recomputed only when it runs empty or when a newly
//! discovered obstacle invalidates it (the stale route might cross the
//! obstacle). The run stops when all obstacles are found, when no
//! informative viewpoint remains, or when the selected viewpoint is
//! unreachable.

use std::collections::VecDeque;

use crate::core::{Move, Pose};
use crate::exploration::{select_viewpoint, ExplorationState};
use crate::planning::RoutePlanner;
use crate::render::Plotter;
use crate::world::Environment;

use super::{perform_move, Strategy};

/// Frontier-driven exploration with A* routing.
pub struct FrontierStrategy {
    /// Accumulated exploration knowledge
    state: ExplorationState,
    /// Remaining moves of the current route, consumed front to back
    queue: VecDeque<Move>,
    /// Move selected by `plan` for `act` to perform this tick
    pending: Option<Move>,
    /// Found-obstacle count at the last planning call, for staleness
    /// detection
    planned_obstacles: usize,
    /// Number of routes computed so far
    replans: usize,
}

impl FrontierStrategy {
    /// Create a fresh strategy with no knowledge of the grid.
    pub fn new() -> Self {
        Self {
            state: ExplorationState::new(),
            queue: VecDeque::new(),
            pending: None,
            planned_obstacles: 0,
            replans: 0,
        }
    }

    /// Accumulated exploration knowledge.
    pub fn state(&self) -> &ExplorationState {
        &self.state
    }

    /// Number of routes computed so far.
    pub fn replans(&self) -> usize {
        self.replans
    }

    /// Remaining moves in the current route.
    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }
}

impl Default for FrontierStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for FrontierStrategy {
    fn sense(&mut self, env: &mut dyn Environment) {
        let pose = Pose::new(env.position(), env.heading());
        self.state
            .observe(env.read_sensor(), pose.surroundings(), pose.position);

        if self.state.obstacle_count() == env.obstacle_count() {
            tracing::info!("all {} obstacles found", self.state.obstacle_count());
            env.stop();
        }
    }

    fn plan(&mut self, env: &mut dyn Environment) {
        // Replan only when the route is exhausted or stale; an
        // unchanged, non-empty queue is reused verbatim.
        if self.queue.is_empty() || self.state.obstacle_count() > self.planned_obstacles {
            let robot = Pose::new(env.position(), env.heading());

            let goal = match select_viewpoint(
                env.grid_width(),
                env.grid_height(),
                robot.position,
                &self.state,
            ) {
                Some(goal) => goal,
                None => {
                    // Nothing informative left to look at.
                    tracing::info!("exploration exhausted, stopping");
                    env.stop();
                    self.pending = None;
                    return;
                }
            };

            let planner = RoutePlanner::new(
                env.grid_width(),
                env.grid_height(),
                self.state.found_obstacles(),
            );
            let route = planner.plan(robot, goal);
            tracing::debug!(
                "planned route to ({}, {}) heading {}: {} moves, {} nodes expanded",
                goal.position.x,
                goal.position.y,
                goal.heading.index(),
                route.moves.len(),
                route.nodes_expanded
            );

            self.queue = route.moves;
            self.planned_obstacles = self.state.obstacle_count();
            self.replans += 1;
        }

        match self.queue.pop_front() {
            Some(mv) => self.pending = Some(mv),
            None => {
                // Freshly planned and still empty: the viewpoint is
                // unreachable.
                tracing::info!("selected viewpoint is unreachable, stopping");
                env.stop();
                self.pending = None;
            }
        }
    }

    fn act(&mut self, env: &mut dyn Environment) {
        if let Some(mv) = self.pending.take() {
            perform_move(env, mv);
        }
    }

    fn plot(&self, plotter: &mut dyn Plotter) {
        plotter.plot(self.state.found_obstacles());
    }
}
