//! # GridScout: Frontier-Based Obstacle Discovery Simulator
//!
//! Simulates a wheeled robot confined to an integer grid, equipped with a
//! three-cell local sensor (left, front, right relative to heading). The
//! robot's task is to discover the positions of a fixed number of
//! obstacles scattered on the grid.
//!
//! ## Architecture
//!
//! The crate is organized into modules:
//!
//! - [`core`]: Fundamental types (GridCoord, Heading, Pose, Move, ...)
//! - [`world`]: The [`Environment`] capability trait and the in-memory
//!   [`GridWorld`] implementation
//! - [`exploration`]: Exploration bookkeeping and the frontier selector
//! - [`planning`]: Pose-space A* route planning
//! - [`strategy`]: The per-tick [`Strategy`] interface and its three
//!   implementations (random, no-backtrack random, deterministic frontier)
//! - [`render`]: The one-way [`Plotter`] seam and the console renderer
//! - [`sim`]: The tick driver (sense -> plan -> act -> plot)
//! - [`config`]: TOML configuration with validation
//!
//! ## Control Flow
//!
//! ```text
//!          +--------- one tick ----------+
//!          |                             |
//!   sense ---> plan ---> act ---> plot --+--> next tick
//!     |         |
//!     |         +-- queue empty or new obstacle? replan via
//!     |             frontier selector + A* route planner
//!     |
//!     +-- updates found obstacles / seen cells, may raise stop
//! ```
//!
//! A stop signal raised in any phase suppresses the remaining mutating
//! phases of that tick; once stopped the simulation is terminal.
//!
//! ## Quick Start
//!
//! ```rust
//! use gridscout::render::NullPlotter;
//! use gridscout::sim::Simulation;
//! use gridscout::strategy::{DynStrategy, StrategyKind};
//! use gridscout::world::GridWorld;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(7);
//! let world = GridWorld::generate(8, 8, 5, &mut rng);
//! let strategy = DynStrategy::new(StrategyKind::DeterministicFrontier, rng);
//! let mut sim = Simulation::new(world, strategy, NullPlotter);
//!
//! while sim.tick() {
//!     if sim.ticks() > 10_000 {
//!         break;
//!     }
//! }
//! assert!(sim.world().is_stopped());
//! ```

pub mod config;
pub mod core;
pub mod error;
pub mod exploration;
pub mod planning;
pub mod render;
pub mod sim;
pub mod strategy;
pub mod world;

// Re-export main types at crate root
pub use config::ScoutConfig;
pub use error::{Result, ScoutError};
pub use render::{ConsolePlotter, NullPlotter, Plotter};
pub use sim::Simulation;
pub use strategy::{DynStrategy, Strategy, StrategyKind};
pub use world::{Environment, GridWorld};
