//! Exploration bookkeeping and frontier viewpoint selection.
//!
//! [`ExplorationState`] is the knowledge a strategy accumulates while
//! exploring: which obstacles have been confirmed and which cells have
//! ever been in sensor range. [`select_viewpoint`] scans the full pose
//! space for the most informative, nearest place to look next.

pub mod frontier;
pub mod state;

pub use frontier::{information_value, select_viewpoint};
pub use state::{record_sensed_obstacles, ExplorationState};
