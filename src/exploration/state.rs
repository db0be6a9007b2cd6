//! Exploration state: confirmed obstacles and previously seen cells.

use std::collections::HashSet;

use crate::core::{GridCoord, SensorData, Surroundings};

/// Record obstacles reported by one sensor reading into `found`.
///
/// Each flagged cell is inserted once; re-sensing a known obstacle is a
/// no-op.
pub fn record_sensed_obstacles(
    found: &mut HashSet<GridCoord>,
    reading: SensorData,
    surroundings: Surroundings,
) {
    if reading.left {
        found.insert(surroundings.left);
    }
    if reading.front {
        found.insert(surroundings.front);
    }
    if reading.right {
        found.insert(surroundings.right);
    }
}

/// Knowledge accumulated while exploring.
///
/// Both sets grow monotonically and are mutated only by [`observe`]
/// (the sensing step). Seen cells include every cell that was ever in
/// sensor range or occupied by the robot, including out-of-bounds
/// cells sensed from the grid border, which matter for frontier scoring
/// near the edges.
///
/// [`observe`]: ExplorationState::observe
#[derive(Clone, Debug, Default)]
pub struct ExplorationState {
    found_obstacles: HashSet<GridCoord>,
    seen_cells: HashSet<GridCoord>,
}

impl ExplorationState {
    /// Create an empty state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one sensor reading into the state.
    ///
    /// Flagged cells join the obstacle set; the three sensed cells and
    /// the robot's own position join the seen set.
    pub fn observe(&mut self, reading: SensorData, surroundings: Surroundings, position: GridCoord) {
        record_sensed_obstacles(&mut self.found_obstacles, reading, surroundings);

        self.seen_cells.insert(surroundings.front);
        self.seen_cells.insert(surroundings.left);
        self.seen_cells.insert(surroundings.right);
        self.seen_cells.insert(position);
    }

    /// Number of confirmed obstacles.
    #[inline]
    pub fn obstacle_count(&self) -> usize {
        self.found_obstacles.len()
    }

    /// The confirmed obstacle set.
    pub fn found_obstacles(&self) -> &HashSet<GridCoord> {
        &self.found_obstacles
    }

    /// Whether `cell` is a confirmed obstacle.
    #[inline]
    pub fn is_known_obstacle(&self, cell: GridCoord) -> bool {
        self.found_obstacles.contains(&cell)
    }

    /// Whether `cell` has ever been sensed or occupied.
    #[inline]
    pub fn has_seen(&self, cell: GridCoord) -> bool {
        self.seen_cells.contains(&cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Heading, Pose};

    #[test]
    fn test_observe_records_obstacles_and_seen_cells() {
        let mut state = ExplorationState::new();
        let pose = Pose::new(GridCoord::new(1, 1), Heading::North);
        let s = pose.surroundings();

        let reading = SensorData {
            left: false,
            front: true,
            right: false,
        };
        state.observe(reading, s, pose.position);

        assert_eq!(state.obstacle_count(), 1);
        assert!(state.is_known_obstacle(s.front));
        assert!(!state.is_known_obstacle(s.left));

        assert!(state.has_seen(s.left));
        assert!(state.has_seen(s.front));
        assert!(state.has_seen(s.right));
        assert!(state.has_seen(pose.position));
        assert!(!state.has_seen(GridCoord::new(3, 3)));
    }

    #[test]
    fn test_observe_deduplicates() {
        let mut state = ExplorationState::new();
        let pose = Pose::new(GridCoord::new(1, 1), Heading::North);
        let reading = SensorData {
            left: true,
            front: true,
            right: true,
        };

        // Sensing the same cells repeatedly must not grow the sets.
        for _ in 0..3 {
            state.observe(reading, pose.surroundings(), pose.position);
        }
        assert_eq!(state.obstacle_count(), 3);
    }

    #[test]
    fn test_off_grid_cells_may_be_seen() {
        // A robot on the border senses cells outside the grid; those are
        // still recorded as seen.
        let mut state = ExplorationState::new();
        let pose = Pose::new(GridCoord::new(0, 0), Heading::West);
        state.observe(SensorData::default(), pose.surroundings(), pose.position);

        assert!(state.has_seen(GridCoord::new(-1, 0)));
        assert!(state.has_seen(GridCoord::new(0, -1)));
    }
}
