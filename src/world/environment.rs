//! Environment capability trait for strategy/world decoupling.

use crate::core::{GridCoord, Heading, SensorData};

/// Capability surface a strategy requires from its environment.
///
/// Implement this trait to drive a strategy against a different world
/// model (or a scripted test double). [`GridWorld`](super::GridWorld) is
/// the in-memory implementation used by the simulator.
///
/// # Example
///
/// ```ignore
/// fn step(env: &mut dyn Environment) {
///     let reading = env.read_sensor();
///     if !reading.front {
///         env.move_forward();
///     } else {
///         env.turn_left();
///     }
/// }
/// ```
pub trait Environment {
    /// Current robot position.
    fn position(&self) -> GridCoord;

    /// Current robot heading.
    fn heading(&self) -> Heading;

    /// Grid width in cells.
    fn grid_width(&self) -> i32;

    /// Grid height in cells.
    fn grid_height(&self) -> i32;

    /// Ground-truth number of obstacles on the grid.
    ///
    /// Used only as a termination oracle (all obstacles found), never
    /// for planning.
    fn obstacle_count(&self) -> usize;

    /// Read the three-cell sensor at the current pose.
    fn read_sensor(&self) -> SensorData;

    /// Rotate the robot counter-clockwise in place.
    fn turn_left(&mut self);

    /// Rotate the robot clockwise in place.
    fn turn_right(&mut self);

    /// Advance the robot one cell in its current heading.
    ///
    /// The environment does not validate the target cell; callers plan
    /// only legal moves.
    fn move_forward(&mut self);

    /// Raise the terminal stop signal.
    fn stop(&mut self);
}
