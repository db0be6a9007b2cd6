//! Robot pose primitives: heading, pose, surroundings, sensor data, moves.
//!
//! Headings are the four cardinal directions with a cyclic integer
//! encoding in `[0, 4)`: adding 1 (mod 4) is a left turn, adding 3
//! (mod 4) is a right turn. Index 0 faces +Y, and left turns advance
//! counter-clockwise (+Y, -X, -Y, +X).

use serde::{Deserialize, Serialize};

use super::point::GridCoord;

/// Cardinal heading of the robot.
///
/// The discriminants match the cyclic orientation encoding, so
/// `Heading::ALL` iterates in index order 0..4.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Heading {
    /// Facing +Y (index 0)
    North = 0,
    /// Facing -X (index 1)
    West = 1,
    /// Facing -Y (index 2)
    South = 2,
    /// Facing +X (index 3)
    East = 3,
}

impl Heading {
    /// All headings in index order.
    pub const ALL: [Heading; 4] = [Heading::North, Heading::West, Heading::South, Heading::East];

    /// Cyclic index of this heading in `[0, 4)`.
    #[inline]
    pub fn index(self) -> i32 {
        self as i32
    }

    /// Heading for a cyclic index (taken mod 4).
    #[inline]
    pub fn from_index(index: i32) -> Self {
        Heading::ALL[index.rem_euclid(4) as usize]
    }

    /// Heading after a left (counter-clockwise) turn: index +1 mod 4.
    #[inline]
    pub fn turned_left(self) -> Self {
        Heading::from_index(self.index() + 1)
    }

    /// Heading after a right (clockwise) turn: index +3 mod 4.
    #[inline]
    pub fn turned_right(self) -> Self {
        Heading::from_index(self.index() + 3)
    }

    /// Offset of the cell one step ahead in this heading.
    #[inline]
    pub fn forward_offset(self) -> GridCoord {
        match self {
            Heading::North => GridCoord::new(0, 1),
            Heading::West => GridCoord::new(-1, 0),
            Heading::South => GridCoord::new(0, -1),
            Heading::East => GridCoord::new(1, 0),
        }
    }

    /// Console glyph for a robot facing this heading.
    #[inline]
    pub fn glyph(self) -> char {
        match self {
            Heading::North => '^',
            Heading::West => '<',
            Heading::South => 'v',
            Heading::East => '>',
        }
    }
}

/// A robot pose: grid position plus heading.
///
/// Poses are plain values compared by structural equality; the planner
/// searches over them as graph nodes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Pose {
    /// Cell the robot occupies
    pub position: GridCoord,
    /// Direction the robot faces
    pub heading: Heading,
}

impl Pose {
    /// Create a new pose
    #[inline]
    pub fn new(position: GridCoord, heading: Heading) -> Self {
        Self { position, heading }
    }

    /// The three cells adjacent to this pose in its left, front, and
    /// right directions, obtained by rotating the absolute neighbor
    /// offsets according to the heading.
    pub fn surroundings(&self) -> Surroundings {
        Surroundings {
            left: self.position + self.heading.turned_left().forward_offset(),
            front: self.position + self.heading.forward_offset(),
            right: self.position + self.heading.turned_right().forward_offset(),
        }
    }

    /// The cell one step ahead of this pose.
    #[inline]
    pub fn front_cell(&self) -> GridCoord {
        self.position + self.heading.forward_offset()
    }
}

/// The three cells a pose can sense, in grid coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Surroundings {
    /// Cell to the left of the pose
    pub left: GridCoord,
    /// Cell in front of the pose
    pub front: GridCoord,
    /// Cell to the right of the pose
    pub right: GridCoord,
}

/// One sensor reading: obstacle presence in the three sensed cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SensorData {
    /// Obstacle in the left cell
    pub left: bool,
    /// Obstacle in the front cell
    pub front: bool,
    /// Obstacle in the right cell
    pub right: bool,
}

/// One robot action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    /// Rotate counter-clockwise in place
    TurnLeft,
    /// Advance one cell in the current heading
    MoveForward,
    /// Rotate clockwise in place
    TurnRight,
}

/// Infer the move that transforms `parent` into `child`.
///
/// Exactly one action separates the two poses: a changed position means a
/// forward step, otherwise the heading delta distinguishes left from
/// right.
#[inline]
pub fn infer_move(parent: &Pose, child: &Pose) -> Move {
    if child.position != parent.position {
        Move::MoveForward
    } else if child.heading == parent.heading.turned_left() {
        Move::TurnLeft
    } else {
        Move::TurnRight
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_cycle() {
        let mut heading = Heading::North;
        for _ in 0..4 {
            heading = heading.turned_left();
        }
        assert_eq!(heading, Heading::North);

        assert_eq!(Heading::North.turned_left(), Heading::West);
        assert_eq!(Heading::West.turned_left(), Heading::South);
        assert_eq!(Heading::South.turned_left(), Heading::East);
        assert_eq!(Heading::East.turned_left(), Heading::North);

        assert_eq!(Heading::North.turned_right(), Heading::East);
        assert_eq!(Heading::East.turned_right(), Heading::South);
    }

    #[test]
    fn test_from_index_wraps() {
        assert_eq!(Heading::from_index(0), Heading::North);
        assert_eq!(Heading::from_index(5), Heading::West);
        assert_eq!(Heading::from_index(-1), Heading::East);
    }

    // Surroundings per heading, checked cell by cell against the sensor
    // geometry: index 0 faces +Y, 1 faces -X, 2 faces -Y, 3 faces +X.
    #[test]
    fn test_surroundings_tables() {
        let p = GridCoord::new(5, 5);

        let s = Pose::new(p, Heading::North).surroundings();
        assert_eq!(s.left, GridCoord::new(4, 5));
        assert_eq!(s.front, GridCoord::new(5, 6));
        assert_eq!(s.right, GridCoord::new(6, 5));

        let s = Pose::new(p, Heading::West).surroundings();
        assert_eq!(s.left, GridCoord::new(5, 4));
        assert_eq!(s.front, GridCoord::new(4, 5));
        assert_eq!(s.right, GridCoord::new(5, 6));

        let s = Pose::new(p, Heading::South).surroundings();
        assert_eq!(s.left, GridCoord::new(6, 5));
        assert_eq!(s.front, GridCoord::new(5, 4));
        assert_eq!(s.right, GridCoord::new(4, 5));

        let s = Pose::new(p, Heading::East).surroundings();
        assert_eq!(s.left, GridCoord::new(5, 6));
        assert_eq!(s.front, GridCoord::new(6, 5));
        assert_eq!(s.right, GridCoord::new(5, 4));
    }

    #[test]
    fn test_infer_move() {
        let start = Pose::new(GridCoord::new(2, 2), Heading::North);

        let forward = Pose::new(GridCoord::new(2, 3), Heading::North);
        assert_eq!(infer_move(&start, &forward), Move::MoveForward);

        let left = Pose::new(GridCoord::new(2, 2), Heading::West);
        assert_eq!(infer_move(&start, &left), Move::TurnLeft);

        let right = Pose::new(GridCoord::new(2, 2), Heading::East);
        assert_eq!(infer_move(&start, &right), Move::TurnRight);
    }
}
