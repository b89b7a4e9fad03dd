// Food target selection
//
// Food is ranked by squared distance from the head and searched in that order;
// the first target with a path wins.

use log::debug;

use crate::search::{Path, PathSearch, SearchState};
use crate::types::Point;

/// A food item and its squared distance from the head
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FoodCandidate {
    pub point: Point,
    pub distance: i64,
}

/// A reachable food target and the path that reaches it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub point: Point,
    pub path: Path,
    /// Recursive calls spent on this target
    pub calls: usize,
}

/// Food ordered by ascending squared distance; equal distances keep input order
pub fn rank_food(head: Point, food: &[Point]) -> Vec<FoodCandidate> {
    let mut candidates: Vec<FoodCandidate> = food
        .iter()
        .map(|&point| FoodCandidate {
            point,
            distance: head.distance_squared(&point),
        })
        .collect();
    candidates.sort_by_key(|c| c.distance);
    candidates
}

/// Tries each food candidate closest-first with a fresh call budget and returns
/// the first one a path was found for
pub fn select_target(
    state: &SearchState,
    food: &[Point],
    call_budget: usize,
) -> Option<Target> {
    for candidate in rank_food(state.head(), food) {
        let mut search = PathSearch::new(call_budget);
        match search.find_path(state, candidate.point) {
            Some(path) => {
                debug!(
                    "Path to food ({}, {}) found: {} step(s), {} call(s)",
                    candidate.point.x,
                    candidate.point.y,
                    path.step_count(),
                    search.calls()
                );
                return Some(Target {
                    point: candidate.point,
                    path,
                    calls: search.calls(),
                });
            }
            None => {
                debug!(
                    "No path to food ({}, {}) after {} call(s){}",
                    candidate.point.x,
                    candidate.point.y,
                    search.calls(),
                    if search.budget_exceeded() { " (budget exceeded)" } else { "" }
                );
            }
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::Grid;
    use crate::types::Direction;

    fn state_with(width: i32, height: i32, bodies: &[(i32, i32)], head: (i32, i32)) -> SearchState {
        let mut grid = Grid::new(width, height);
        for &(x, y) in bodies {
            grid.mark_occupied(Point::new(x, y));
        }
        SearchState::new(grid, Point::new(head.0, head.1))
    }

    #[test]
    fn test_find_closest_food() {
        // Head (0,8): (0,0) is 64 away, (0,1) is 49 away
        let ranked = rank_food(Point::new(0, 8), &[Point::new(0, 0), Point::new(0, 1)]);
        assert_eq!(ranked[0].point, Point::new(0, 1));
        assert_eq!(ranked[0].distance, 49);
        assert_eq!(ranked[1].point, Point::new(0, 0));
        assert_eq!(ranked[1].distance, 64);
    }

    #[test]
    fn test_rank_food_is_stable_on_ties() {
        let food = [Point::new(2, 0), Point::new(0, 2), Point::new(1, 0)];
        let ranked = rank_food(Point::new(0, 0), &food);
        let points: Vec<Point> = ranked.iter().map(|c| c.point).collect();
        assert_eq!(points, vec![Point::new(1, 0), Point::new(2, 0), Point::new(0, 2)]);
    }

    #[test]
    fn test_select_target_picks_closest_reachable() {
        let state = state_with(10, 10, &[(0, 8), (0, 9), (2, 9), (2, 8)], (0, 8));
        let target = select_target(&state, &[Point::new(0, 0), Point::new(0, 1)], 50).unwrap();

        assert_eq!(target.point, Point::new(0, 1));
        assert_eq!(target.path.first_move(), Direction::Up);
        assert_eq!(target.path.step_count(), 7);
    }

    #[test]
    fn test_select_target_skips_unreachable_food() {
        // (3,3) is closer but boxed in; (9,0) is further away and open
        let state = state_with(10, 10, &[(0, 0), (2, 3), (4, 3), (3, 2), (3, 4)], (0, 0));
        let target = select_target(&state, &[Point::new(9, 0), Point::new(3, 3)], 50).unwrap();

        assert_eq!(target.point, Point::new(9, 0));
        assert_eq!(target.path.first_move(), Direction::Right);
        assert_eq!(target.path.step_count(), 9);
    }

    #[test]
    fn test_select_target_without_food() {
        let state = state_with(5, 5, &[(2, 2)], (2, 2));
        assert_eq!(select_target(&state, &[], 50), None);
    }
}
