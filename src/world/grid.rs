//! In-memory grid world: obstacle layout, robot pose, stop latch.

use std::collections::HashSet;

use rand::Rng;

use crate::core::{GridCoord, Heading, Pose, SensorData};

use super::environment::Environment;

/// Cell the robot starts in. Obstacle generation never places one here.
const START_CELL: GridCoord = GridCoord { x: 0, y: 0 };

/// Heading the robot starts with (index 1, facing -X).
const START_HEADING: Heading = Heading::West;

/// A rectangular grid with scattered obstacles and a single robot.
///
/// Owns the ground-truth obstacle set, the robot pose, and the stop
/// latch. All strategy access goes through the [`Environment`] trait.
#[derive(Clone, Debug)]
pub struct GridWorld {
    width: i32,
    height: i32,
    obstacles: HashSet<GridCoord>,
    robot: Pose,
    stopped: bool,
}

impl GridWorld {
    /// Create a world with a fixed obstacle layout.
    ///
    /// Callers are responsible for a sane layout (positive dimensions,
    /// obstacle count below the cell count, start cell free); the
    /// simulator validates its configuration before building a world.
    pub fn with_obstacles(
        width: i32,
        height: i32,
        obstacles: impl IntoIterator<Item = GridCoord>,
    ) -> Self {
        Self {
            width,
            height,
            obstacles: obstacles.into_iter().collect(),
            robot: Pose::new(START_CELL, START_HEADING),
            stopped: false,
        }
    }

    /// Create a world with `obstacle_count` obstacles scattered uniformly
    /// at random: all distinct, never on the start cell.
    pub fn generate(width: i32, height: i32, obstacle_count: usize, rng: &mut impl Rng) -> Self {
        let mut obstacles = HashSet::with_capacity(obstacle_count);
        while obstacles.len() < obstacle_count {
            let cell = GridCoord::new(rng.random_range(0..width), rng.random_range(0..height));
            if cell == START_CELL {
                continue;
            }
            obstacles.insert(cell);
        }
        Self::with_obstacles(width, height, obstacles)
    }

    /// Current robot pose.
    #[inline]
    pub fn robot(&self) -> Pose {
        self.robot
    }

    /// Reposition the robot (scenario/test hook).
    pub fn set_robot(&mut self, pose: Pose) {
        self.robot = pose;
    }

    /// Ground-truth obstacle layout.
    pub fn obstacles(&self) -> &HashSet<GridCoord> {
        &self.obstacles
    }

    /// Whether the terminal stop signal has been raised.
    #[inline]
    pub fn is_stopped(&self) -> bool {
        self.stopped
    }
}

impl Environment for GridWorld {
    fn position(&self) -> GridCoord {
        self.robot.position
    }

    fn heading(&self) -> Heading {
        self.robot.heading
    }

    fn grid_width(&self) -> i32 {
        self.width
    }

    fn grid_height(&self) -> i32 {
        self.height
    }

    fn obstacle_count(&self) -> usize {
        self.obstacles.len()
    }

    fn read_sensor(&self) -> SensorData {
        let s = self.robot.surroundings();
        SensorData {
            left: self.obstacles.contains(&s.left),
            front: self.obstacles.contains(&s.front),
            right: self.obstacles.contains(&s.right),
        }
    }

    fn turn_left(&mut self) {
        self.robot.heading = self.robot.heading.turned_left();
    }

    fn turn_right(&mut self) {
        self.robot.heading = self.robot.heading.turned_right();
    }

    fn move_forward(&mut self) {
        self.robot.position = self.robot.front_cell();
    }

    fn stop(&mut self) {
        self.stopped = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_start_pose() {
        let world = GridWorld::with_obstacles(4, 4, [GridCoord::new(2, 2)]);
        assert_eq!(world.robot().position, GridCoord::new(0, 0));
        assert_eq!(world.robot().heading, Heading::West);
        assert!(!world.is_stopped());
    }

    #[test]
    fn test_sensor_reads_adjacent_obstacles() {
        // Robot at (1, 1) facing North: left = (0,1), front = (1,2),
        // right = (2,1).
        let mut world =
            GridWorld::with_obstacles(4, 4, [GridCoord::new(0, 1), GridCoord::new(1, 2)]);
        world.set_robot(Pose::new(GridCoord::new(1, 1), Heading::North));

        let reading = world.read_sensor();
        assert!(reading.left);
        assert!(reading.front);
        assert!(!reading.right);
    }

    #[test]
    fn test_moves_update_pose() {
        let mut world = GridWorld::with_obstacles(4, 4, [GridCoord::new(2, 2)]);
        world.set_robot(Pose::new(GridCoord::new(1, 1), Heading::North));

        world.move_forward();
        assert_eq!(world.position(), GridCoord::new(1, 2));

        world.turn_right();
        assert_eq!(world.heading(), Heading::East);
        world.move_forward();
        assert_eq!(world.position(), GridCoord::new(2, 2));

        world.turn_left();
        assert_eq!(world.heading(), Heading::North);
    }

    #[test]
    fn test_stop_latch() {
        let mut world = GridWorld::with_obstacles(4, 4, [GridCoord::new(2, 2)]);
        assert!(!world.is_stopped());
        world.stop();
        assert!(world.is_stopped());
    }

    #[test]
    fn test_generate_obstacles() {
        let mut rng = StdRng::seed_from_u64(42);
        let world = GridWorld::generate(6, 5, 10, &mut rng);

        // Exactly the requested number of distinct obstacles, all in
        // bounds, never on the start cell.
        assert_eq!(world.obstacles().len(), 10);
        for obstacle in world.obstacles() {
            assert!(obstacle.in_bounds(6, 5));
            assert_ne!(*obstacle, GridCoord::new(0, 0));
        }
    }

    #[test]
    fn test_generate_is_seed_reproducible() {
        let a = GridWorld::generate(8, 8, 12, &mut StdRng::seed_from_u64(7));
        let b = GridWorld::generate(8, 8, 12, &mut StdRng::seed_from_u64(7));
        assert_eq!(a.obstacles(), b.obstacles());
    }
}
