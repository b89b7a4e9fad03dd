// Integration tests for the decision engine
//
// Exercises the public path: snapshot -> grid -> target selection -> backtracking
// search -> first planned step, using the board fixtures from the legacy test-suite.

use pathfinder_snake::engine::{self, Outcome};
use pathfinder_snake::error::MoveError;
use pathfinder_snake::grid::Grid;
use pathfinder_snake::search::{PathSearch, SearchState, DEFAULT_CALL_BUDGET};
use pathfinder_snake::types::{Point, Snake, Snapshot};
use pathfinder_snake::config::Config;

use pathfinder_snake::types::Direction::{Down, Left, Right, Up};

fn snake(id: &str, coords: &[(i32, i32)]) -> Snake {
    Snake {
        id: id.to_string(),
        name: format!("test-name-{}", id),
        taunt: String::new(),
        health_points: 100,
        coords: coords.iter().map(|&(x, y)| Point::new(x, y)).collect(),
    }
}

/// 10x10 board with food at (0,0) and (0,1); own snake head (0,8), opponent on the bottom rows
fn move_request_fixture() -> Snapshot {
    Snapshot {
        width: 10,
        height: 10,
        you: "test-id-1".to_string(),
        snakes: vec![
            snake("test-id-1", &[(0, 8), (0, 9)]),
            snake("test-id-2", &[(2, 9), (2, 8)]),
        ],
        food: vec![Point::new(0, 0), Point::new(0, 1)],
    }
}

fn search_state(snapshot: &Snapshot) -> SearchState {
    engine::build_state(snapshot).expect("fixture is valid")
}

#[test]
fn test_backtrack_find_path() {
    let mut snapshot = move_request_fixture();
    snapshot.snakes[0].coords = vec![Point::new(0, 9), Point::new(0, 8)];
    let state = search_state(&snapshot);

    let mut search = PathSearch::new(DEFAULT_CALL_BUDGET);
    let path = search
        .find_path(&state, Point::new(0, 1))
        .expect("path should exist");

    assert_eq!(path.as_built(), &[Left, Up, Up, Up, Up, Up, Up, Up, Up, Right]);
}

#[test]
fn test_backtrack_find_path_around_pocket() {
    let mut snapshot = move_request_fixture();
    snapshot.snakes[0].coords = vec![Point::new(1, 0), Point::new(0, 1), Point::new(1, 1)];
    snapshot.snakes[1].coords = vec![Point::new(3, 1), Point::new(3, 2), Point::new(3, 3)];
    snapshot.food[0] = Point::new(0, 8);
    let state = search_state(&snapshot);

    let mut search = PathSearch::new(DEFAULT_CALL_BUDGET);
    let path = search
        .find_path(&state, snapshot.food[0])
        .expect("path should exist");

    assert_eq!(
        path.as_built(),
        &[Left, Left, Down, Down, Down, Down, Down, Down, Down, Down, Right]
    );
}

#[test]
fn test_choose_direction_plays_last_built_step() {
    let mut snapshot = move_request_fixture();
    snapshot.snakes[0].coords = vec![Point::new(0, 9), Point::new(0, 8)];

    assert_eq!(
        engine::choose_direction(&snapshot, DEFAULT_CALL_BUDGET),
        Ok(Right)
    );
}

#[test]
fn test_closest_food_is_tried_first() {
    let plan = engine::plan_turn(&move_request_fixture(), DEFAULT_CALL_BUDGET).unwrap();
    assert_eq!(plan.target, Point::new(0, 1));
}

#[test]
fn test_enclosed_head_terminates_within_budget() {
    let snapshot = Snapshot {
        width: 7,
        height: 7,
        you: "me".to_string(),
        snakes: vec![
            snake("me", &[(3, 3), (3, 4)]),
            snake("other", &[(2, 3), (4, 3), (3, 2)]),
        ],
        food: vec![Point::new(0, 0), Point::new(6, 6)],
    };

    let mut search = PathSearch::new(DEFAULT_CALL_BUDGET);
    assert!(search
        .find_path(&search_state(&snapshot), Point::new(0, 0))
        .is_none());
    assert!(search.calls() <= DEFAULT_CALL_BUDGET + 1);

    assert_eq!(
        engine::choose_direction(&snapshot, DEFAULT_CALL_BUDGET),
        Err(MoveError::SearchExhausted { candidates: 2 })
    );
}

#[test]
fn test_budget_is_a_hard_stop() {
    // Food sealed inside a ring on an otherwise open board: the search wanders until cut off
    let snapshot = Snapshot {
        width: 11,
        height: 11,
        you: "me".to_string(),
        snakes: vec![
            snake("me", &[(0, 0), (0, 1)]),
            snake("ring", &[(9, 10), (9, 9), (10, 9)]),
        ],
        food: vec![Point::new(10, 10)],
    };
    let state = search_state(&snapshot);

    for budget in [1, 5, 20, 50] {
        let mut search = PathSearch::new(budget);
        assert!(search.find_path(&state, Point::new(10, 10)).is_none());
        assert!(search.budget_exceeded());
        assert_eq!(search.calls(), budget + 1);
    }
}

#[test]
fn test_choose_direction_is_idempotent() {
    let snapshot = move_request_fixture();
    let first = engine::choose_direction(&snapshot, DEFAULT_CALL_BUDGET);
    let second = engine::choose_direction(&snapshot, DEFAULT_CALL_BUDGET);

    assert_eq!(first, Ok(Up));
    assert_eq!(first, second);
}

#[test]
fn test_cloned_state_does_not_leak_into_original() {
    let state = search_state(&move_request_fixture());
    let mut branch = state.branch();

    branch.apply_direction(Up);

    assert_eq!(state.head(), Point::new(0, 8));
    assert_eq!(branch.head(), Point::new(0, 7));
    assert!(state.grid().is_free(Point::new(0, 7)));
    assert!(!branch.grid().is_free(Point::new(0, 7)));
}

#[test]
fn test_unknown_own_id_is_reported() {
    let mut snapshot = move_request_fixture();
    snapshot.you = "nobody".to_string();

    let decision = engine::decide(&snapshot, &Config::default_hardcoded());
    assert_eq!(decision.direction, Up);
    assert_eq!(
        decision.outcome,
        Outcome::Fallback {
            reason: MoveError::NoOwnSnake {
                id: "nobody".to_string()
            }
        }
    );
}

#[test]
fn test_grid_marks_every_snake() {
    let snapshot = move_request_fixture();
    let grid = Grid::from_snakes(snapshot.width, snapshot.height, &snapshot.snakes);

    for p in [(0, 8), (0, 9), (2, 9), (2, 8)] {
        assert!(!grid.is_free(Point::new(p.0, p.1)));
    }
    assert!(grid.is_free(Point::new(1, 9)));
}
