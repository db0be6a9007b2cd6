//! Frontier viewpoint selection for autonomous exploration.
//!
//! A viewpoint is a candidate pose scored by how much unseen territory
//! its sensor would cover. The selector scans every pose on the grid and
//! returns the most informative one, preferring nearby candidates on
//! ties.

use crate::core::{GridCoord, Heading, Pose};

use super::state::ExplorationState;

/// Information value of a candidate pose: how many of its three sensed
/// cells have never been seen.
///
/// A pose standing on a known obstacle scores 0 (the robot can never be
/// there). Otherwise the score starts at 3 and drops by one for each of
/// the left/front/right cells already seen, so a pose facing entirely
/// unseen territory scores 3 and one facing fully covered territory
/// scores 0.
pub fn information_value(pose: &Pose, state: &ExplorationState) -> i32 {
    if state.is_known_obstacle(pose.position) {
        return 0;
    }

    let s = pose.surroundings();
    let mut value = 3;
    for cell in [s.left, s.front, s.right] {
        if state.has_seen(cell) {
            value -= 1;
        }
    }
    value
}

/// Select the next viewpoint to explore.
///
/// Scans every (x, y, heading) combination in x-major, then y, then
/// heading-index order. The winner has the strictly greatest information
/// value; ties prefer the strictly smaller Manhattan distance from
/// `robot`, and remaining ties keep the first candidate in scan order.
/// The scan order is part of the observable behavior; it makes runs
/// reproducible.
///
/// Returns `None` when the best value is not positive: every pose faces
/// fully covered territory, so there is nothing informative left and the
/// caller should raise the stop signal.
pub fn select_viewpoint(
    width: i32,
    height: i32,
    robot: GridCoord,
    state: &ExplorationState,
) -> Option<Pose> {
    let mut best = None;
    let mut best_value = i32::MIN;
    let mut best_distance = i32::MAX;

    for x in 0..width {
        for y in 0..height {
            for heading in Heading::ALL {
                let pose = Pose::new(GridCoord::new(x, y), heading);
                let value = information_value(&pose, state);
                let distance = robot.manhattan_distance(&pose.position);

                if value > best_value || (value == best_value && distance < best_distance) {
                    best = Some(pose);
                    best_value = value;
                    best_distance = distance;
                }
            }
        }
    }

    if best_value <= 0 {
        tracing::debug!("no informative viewpoint remains (best value {})", best_value);
        return None;
    }

    if let Some(pose) = &best {
        tracing::debug!(
            "selected viewpoint ({}, {}) heading {} with value {} at distance {}",
            pose.position.x,
            pose.position.y,
            pose.heading.index(),
            best_value,
            best_distance
        );
    }
    best
}
