//! Route planning over the pose state space.

pub mod astar;

pub use astar::{PlannedRoute, RoutePlanner};
