// Direction ordering for the backtracking search
//
// The cost is not a distance estimate: it only ranks candidates so that moves
// closing the X gap come first, then moves closing the Y gap, then the rest.

use crate::types::{Direction, Point};

/// A candidate direction paired with its ordering cost
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoredDirection {
    pub direction: Direction,
    pub heuristic: u8,
}

/// Direction that reduces the X distance from `from` to `to`, if any
fn optimal_x(from: Point, to: Point) -> Option<Direction> {
    if to.x > from.x {
        Some(Direction::Right)
    } else if to.x < from.x {
        Some(Direction::Left)
    } else {
        None
    }
}

/// Direction that reduces the Y distance from `from` to `to`, if any
fn optimal_y(from: Point, to: Point) -> Option<Direction> {
    if to.y > from.y {
        Some(Direction::Down)
    } else if to.y < from.y {
        Some(Direction::Up)
    } else {
        None
    }
}

/// 0 when `direction` closes the X or Y gap towards `to`, 1 otherwise
pub fn heuristic(from: Point, to: Point, direction: Direction) -> u8 {
    if optimal_x(from, to) == Some(direction) || optimal_y(from, to) == Some(direction) {
        0
    } else {
        1
    }
}

/// Stable sort by ascending cost; equal costs keep their input order
pub fn sort_scored(candidates: &mut [ScoredDirection]) {
    candidates.sort_by_key(|c| c.heuristic);
}

/// All four directions scored against the target and ordered for trial
pub fn ordered_directions(from: Point, to: Point) -> [ScoredDirection; 4] {
    let mut scored = Direction::all().map(|direction| ScoredDirection {
        direction,
        heuristic: heuristic(from, to, direction),
    });
    sort_scored(&mut scored);
    scored
}
