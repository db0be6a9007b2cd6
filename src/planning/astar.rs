//! Pose-space A* route planning.
//!
//! Searches over (position, heading) states with the three-action move
//! set (turn left, move forward, turn right), each action costing 1. The
//! heuristic is the Manhattan distance between positions and ignores
//! heading, so it does not account for turning cost near the goal; route
//! choices are reproduced as-is rather than re-optimized.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};

use crate::core::{infer_move, GridCoord, Heading, Move, Pose};

/// A node in the A* search.
///
/// `seq` is the insertion sequence number; breaking F ties by the
/// smallest `seq` makes the heap pop the first-encountered minimum in
/// insertion order, which is observable in route tie-breaks and must be
/// stable.
#[derive(Clone, Debug)]
struct SearchNode {
    pose: Pose,
    g: i32,
    f: i32,
    seq: u64,
}

impl Eq for SearchNode {}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f && self.seq == other.seq
    }
}

impl Ord for SearchNode {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior; lowest f first, then
        // lowest insertion sequence.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for SearchNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Result of route planning.
///
/// `moves` is empty when no route exists (or when start equals goal);
/// the caller treats an empty route as a stop condition either way.
#[derive(Clone, Debug)]
pub struct PlannedRoute {
    /// Actions from start to goal, consumed front to back
    pub moves: VecDeque<Move>,
    /// Number of nodes expanded during the search
    pub nodes_expanded: usize,
}

/// Pose-space A* planner over a known-obstacle grid.
pub struct RoutePlanner<'a> {
    width: i32,
    height: i32,
    obstacles: &'a HashSet<GridCoord>,
}

impl<'a> RoutePlanner<'a> {
    /// Create a planner for a `width` x `height` grid avoiding the given
    /// known-obstacle cells.
    pub fn new(width: i32, height: i32, obstacles: &'a HashSet<GridCoord>) -> Self {
        Self {
            width,
            height,
            obstacles,
        }
    }

    /// Find a minimum-cost action sequence from `start` to `goal`.
    ///
    /// Returns an empty route when the goal pose is unreachable.
    pub fn plan(&self, start: Pose, goal: Pose) -> PlannedRoute {
        let mut open = BinaryHeap::new();
        let mut closed: HashSet<Pose> = HashSet::new();
        let mut parents: HashMap<Pose, Pose> = HashMap::new();
        let mut g_scores: HashMap<Pose, i32> = HashMap::new();

        // Seal known obstacle cells off for every heading so they are
        // never expanded.
        for &cell in self.obstacles {
            for heading in Heading::ALL {
                closed.insert(Pose::new(cell, heading));
            }
        }

        let mut seq = 0u64;
        g_scores.insert(start, 0);
        open.push(SearchNode {
            pose: start,
            g: 0,
            f: start.position.manhattan_distance(&goal.position),
            seq,
        });

        let mut nodes_expanded = 0;

        while let Some(node) = open.pop() {
            // Skip stale duplicates of already-expanded poses.
            if closed.contains(&node.pose) {
                continue;
            }

            if node.pose == goal {
                tracing::trace!(
                    "route found: g={} after expanding {} nodes",
                    node.g,
                    nodes_expanded
                );
                return PlannedRoute {
                    moves: backtrack(&parents, start, goal),
                    nodes_expanded,
                };
            }

            closed.insert(node.pose);
            nodes_expanded += 1;

            let g = node.g + 1;
            for successor in successors(node.pose) {
                if !successor.position.in_bounds(self.width, self.height)
                    || self.obstacles.contains(&successor.position)
                    || closed.contains(&successor)
                {
                    continue;
                }

                let best_g = g_scores.get(&successor).copied().unwrap_or(i32::MAX);
                if g < best_g {
                    g_scores.insert(successor, g);
                    parents.insert(successor, node.pose);
                    seq += 1;
                    open.push(SearchNode {
                        pose: successor,
                        g,
                        f: g + successor.position.manhattan_distance(&goal.position),
                        seq,
                    });
                }
            }
        }

        // Open set exhausted: the goal pose is unreachable.
        tracing::debug!("no route to goal after expanding {} nodes", nodes_expanded);
        PlannedRoute {
            moves: VecDeque::new(),
            nodes_expanded,
        }
    }
}

/// The three successor poses of `pose`, in expansion order: left turn,
/// forward, right turn.
#[inline]
fn successors(pose: Pose) -> [Pose; 3] {
    [
        Pose::new(pose.position, pose.heading.turned_left()),
        Pose::new(pose.front_cell(), pose.heading),
        Pose::new(pose.position, pose.heading.turned_right()),
    ]
}

/// Reconstruct the action sequence by walking parent links from `goal`
/// back to `start`, inferring the move at each step and pushing at the
/// front so the queue executes start to goal.
fn backtrack(parents: &HashMap<Pose, Pose>, start: Pose, goal: Pose) -> VecDeque<Move> {
    let mut moves = VecDeque::new();
    let mut current = goal;

    while current != start {
        match parents.get(&current) {
            Some(&parent) => {
                moves.push_front(infer_move(&parent, &current));
                current = parent;
            }
            // Broken parent chain; treat as no route. Unreachable when
            // called on a successful search.
            None => return VecDeque::new(),
        }
    }

    moves
}

#[cfg(test)]
mod tests {
    use super::*;

    fn no_obstacles() -> HashSet<GridCoord> {
        HashSet::new()
    }

    /// Apply a move sequence to a pose, checking legality along the way.
    fn apply_moves(mut pose: Pose, moves: &VecDeque<Move>, obstacles: &HashSet<GridCoord>) -> Pose {
        for mv in moves {
            match mv {
                Move::TurnLeft => pose.heading = pose.heading.turned_left(),
                Move::TurnRight => pose.heading = pose.heading.turned_right(),
                Move::MoveForward => {
                    pose.position = pose.front_cell();
                    assert!(
                        !obstacles.contains(&pose.position),
                        "route crosses a known obstacle"
                    );
                }
            }
        }
        pose
    }

    #[test]
    fn test_plan_to_self_is_empty() {
        let obstacles = no_obstacles();
        let planner = RoutePlanner::new(5, 5, &obstacles);
        let pose = Pose::new(GridCoord::new(2, 2), Heading::East);

        let route = planner.plan(pose, pose);
        assert!(route.moves.is_empty());
    }

    #[test]
    fn test_straight_line_matches_manhattan_distance() {
        let obstacles = no_obstacles();
        let planner = RoutePlanner::new(5, 5, &obstacles);

        // Orientations already aligned: pure forward motion.
        let start = Pose::new(GridCoord::new(0, 0), Heading::East);
        let goal = Pose::new(GridCoord::new(3, 0), Heading::East);

        let route = planner.plan(start, goal);
        assert_eq!(route.moves.len(), 3);
        assert!(route.moves.iter().all(|m| *m == Move::MoveForward));
        assert_eq!(apply_moves(start, &route.moves, &obstacles), goal);
    }

    #[test]
    fn test_turns_add_minimal_cost() {
        let obstacles = no_obstacles();
        let planner = RoutePlanner::new(5, 5, &obstacles);

        // Move three cells north, then end facing east: 3 forwards plus
        // exactly one right turn.
        let start = Pose::new(GridCoord::new(0, 0), Heading::North);
        let goal = Pose::new(GridCoord::new(0, 3), Heading::East);

        let route = planner.plan(start, goal);
        assert_eq!(route.moves.len(), 4);
        assert_eq!(
            route
                .moves
                .iter()
                .filter(|m| **m == Move::MoveForward)
                .count(),
            3
        );
        assert_eq!(apply_moves(start, &route.moves, &obstacles), goal);
    }

    #[test]
    fn test_route_detours_around_obstacle() {
        // A wall across x = 1..4 at y = 1 forces a detour.
        let obstacles: HashSet<GridCoord> = (1..5).map(|x| GridCoord::new(x, 1)).collect();
        let planner = RoutePlanner::new(6, 4, &obstacles);

        let start = Pose::new(GridCoord::new(2, 0), Heading::North);
        let goal = Pose::new(GridCoord::new(2, 2), Heading::North);

        let route = planner.plan(start, goal);
        assert!(!route.moves.is_empty());
        assert_eq!(apply_moves(start, &route.moves, &obstacles), goal);
        // The direct route would be 2 moves; the detour must be longer.
        assert!(route.moves.len() > 2);
    }

    #[test]
    fn test_enclosed_goal_yields_empty_route() {
        // Goal cell fully surrounded by known obstacles.
        let center = GridCoord::new(2, 2);
        let obstacles: HashSet<GridCoord> = [
            GridCoord::new(1, 2),
            GridCoord::new(3, 2),
            GridCoord::new(2, 1),
            GridCoord::new(2, 3),
        ]
        .into_iter()
        .collect();
        let planner = RoutePlanner::new(5, 5, &obstacles);

        let start = Pose::new(GridCoord::new(0, 0), Heading::East);
        for heading in Heading::ALL {
            let route = planner.plan(start, Pose::new(center, heading));
            assert!(route.moves.is_empty(), "enclosed goal must be unreachable");
        }
    }

    #[test]
    fn test_route_never_leaves_grid() {
        let obstacles = no_obstacles();
        let planner = RoutePlanner::new(3, 3, &obstacles);

        let start = Pose::new(GridCoord::new(0, 0), Heading::West);
        let goal = Pose::new(GridCoord::new(2, 2), Heading::North);

        let route = planner.plan(start, goal);
        let mut pose = start;
        for mv in &route.moves {
            pose = apply_moves(pose, &VecDeque::from([*mv]), &obstacles);
            assert!(pose.position.in_bounds(3, 3));
        }
        assert_eq!(pose, goal);
    }

    #[test]
    fn test_expansion_is_counted() {
        let obstacles = no_obstacles();
        let planner = RoutePlanner::new(4, 4, &obstacles);

        let start = Pose::new(GridCoord::new(0, 0), Heading::East);
        let goal = Pose::new(GridCoord::new(3, 0), Heading::East);

        let route = planner.plan(start, goal);
        assert!(route.nodes_expanded >= route.moves.len());
    }
}
