//! Exploration strategies and runtime strategy selection.
//!
//! Every strategy drives one robot through the same four per-tick
//! phases. The closed set of strategies is selected at runtime through
//! [`StrategyKind`] and dispatched by the [`DynStrategy`] enum.

mod deterministic;
mod no_backtrack;
mod random;

pub use deterministic::FrontierStrategy;
pub use no_backtrack::NoBacktrackStrategy;
pub use random::RandomStrategy;

use std::collections::HashSet;
use std::fmt;

use clap::ValueEnum;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::core::{GridCoord, Move};
use crate::render::Plotter;
use crate::world::Environment;

/// Per-tick strategy interface.
///
/// The simulation driver calls the four phases in order each tick:
/// sense, plan, act, plot. A phase may raise the environment's stop
/// signal; the driver then suppresses the remaining mutating phases of
/// that tick.
pub trait Strategy {
    /// Read the sensor and update internal knowledge. May stop the run
    /// when the exploration goal is reached.
    fn sense(&mut self, env: &mut dyn Environment);

    /// Decide the single move to perform this tick. May stop the run
    /// when no useful move exists.
    fn plan(&mut self, env: &mut dyn Environment);

    /// Perform the decided move: exactly one environment mutation.
    fn act(&mut self, env: &mut dyn Environment);

    /// Hand the found-obstacle set to the display collaborator.
    fn plot(&self, plotter: &mut dyn Plotter);
}

/// Available exploration strategy types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    /// Uniform random walk.
    ///
    /// Turns or moves forward at random; only turns when the front cell
    /// is a known obstacle or out of bounds.
    Random,

    /// Random walk that avoids revisiting cells.
    ///
    /// As Random, but a previously visited front cell also forces a
    /// turn.
    NoBacktrackRandom,

    /// Deterministic frontier exploration.
    ///
    /// Picks the most informative unexplored viewpoint and routes to it
    /// with pose-space A*. The only strategy guaranteed to terminate.
    DeterministicFrontier,
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrategyKind::Random => write!(f, "random"),
            StrategyKind::NoBacktrackRandom => write!(f, "no-backtrack-random"),
            StrategyKind::DeterministicFrontier => write!(f, "deterministic-frontier"),
        }
    }
}

impl StrategyKind {
    /// All strategy kinds, for listings.
    pub const ALL: [StrategyKind; 3] = [
        StrategyKind::Random,
        StrategyKind::NoBacktrackRandom,
        StrategyKind::DeterministicFrontier,
    ];

    /// Get a short description of this strategy.
    pub fn description(&self) -> &'static str {
        match self {
            StrategyKind::Random => "uniform random walk",
            StrategyKind::NoBacktrackRandom => "random walk avoiding visited cells",
            StrategyKind::DeterministicFrontier => {
                "information-gain frontier selection with pose-space A* routing"
            }
        }
    }
}

/// Runtime-selected strategy.
///
/// Wraps the concrete strategies behind one enum so the simulation can
/// hold any of them without boxing.
pub enum DynStrategy {
    /// Uniform random walk
    Random(RandomStrategy),
    /// Random walk avoiding visited cells
    NoBacktrackRandom(NoBacktrackStrategy),
    /// Deterministic frontier exploration
    DeterministicFrontier(FrontierStrategy),
}

impl DynStrategy {
    /// Create a strategy of the given kind.
    ///
    /// The RNG drives the random strategies; the deterministic strategy
    /// ignores it.
    pub fn new(kind: StrategyKind, rng: StdRng) -> Self {
        match kind {
            StrategyKind::Random => DynStrategy::Random(RandomStrategy::new(rng)),
            StrategyKind::NoBacktrackRandom => {
                DynStrategy::NoBacktrackRandom(NoBacktrackStrategy::new(rng))
            }
            StrategyKind::DeterministicFrontier => {
                DynStrategy::DeterministicFrontier(FrontierStrategy::new())
            }
        }
    }

    /// Obstacles this strategy has confirmed so far.
    pub fn found_obstacles(&self) -> &HashSet<GridCoord> {
        match self {
            DynStrategy::Random(s) => s.found_obstacles(),
            DynStrategy::NoBacktrackRandom(s) => s.found_obstacles(),
            DynStrategy::DeterministicFrontier(s) => s.state().found_obstacles(),
        }
    }
}

impl Strategy for DynStrategy {
    fn sense(&mut self, env: &mut dyn Environment) {
        match self {
            DynStrategy::Random(s) => s.sense(env),
            DynStrategy::NoBacktrackRandom(s) => s.sense(env),
            DynStrategy::DeterministicFrontier(s) => s.sense(env),
        }
    }

    fn plan(&mut self, env: &mut dyn Environment) {
        match self {
            DynStrategy::Random(s) => s.plan(env),
            DynStrategy::NoBacktrackRandom(s) => s.plan(env),
            DynStrategy::DeterministicFrontier(s) => s.plan(env),
        }
    }

    fn act(&mut self, env: &mut dyn Environment) {
        match self {
            DynStrategy::Random(s) => s.act(env),
            DynStrategy::NoBacktrackRandom(s) => s.act(env),
            DynStrategy::DeterministicFrontier(s) => s.act(env),
        }
    }

    fn plot(&self, plotter: &mut dyn Plotter) {
        match self {
            DynStrategy::Random(s) => s.plot(plotter),
            DynStrategy::NoBacktrackRandom(s) => s.plot(plotter),
            DynStrategy::DeterministicFrontier(s) => s.plot(plotter),
        }
    }
}

/// Perform one move against the environment.
pub(crate) fn perform_move(env: &mut dyn Environment, mv: Move) {
    match mv {
        Move::TurnLeft => env.turn_left(),
        Move::MoveForward => env.move_forward(),
        Move::TurnRight => env.turn_right(),
    }
}

/// Map a drawn index to a move: 0 turns left, 1 turns right, anything
/// else moves forward. The random strategies draw indices in `0..2` when
/// forward motion is blocked and `0..3` otherwise.
pub(crate) fn move_from_index(index: u32) -> Move {
    match index {
        0 => Move::TurnLeft,
        1 => Move::TurnRight,
        _ => Move::MoveForward,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_from_index_mapping() {
        assert_eq!(move_from_index(0), Move::TurnLeft);
        assert_eq!(move_from_index(1), Move::TurnRight);
        assert_eq!(move_from_index(2), Move::MoveForward);
    }

    #[test]
    fn test_kind_display_round_trip() {
        for kind in StrategyKind::ALL {
            assert!(!kind.description().is_empty());
            assert!(!kind.to_string().is_empty());
        }
    }
}
