// Bounded backtracking path search
//
// Depth-first search towards a single target. Candidate directions are tried in
// heuristic order; every frame works on its own copy of the board so sibling
// branches never see each other's provisional cells. A per-target call budget
// bounds the work on boards where the target cannot be reached.

use crate::escape;
use crate::grid::Grid;
use crate::heuristic;
use crate::types::{Direction, Point};

/// Recursive calls allowed per target unless configured otherwise
pub const DEFAULT_CALL_BUDGET: usize = 50;

/// Directions from the head to a target.
///
/// Built while the recursion unwinds, so the innermost step is stored first and
/// the move to play this turn is the last element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    reversed: Vec<Direction>,
}

impl Path {
    fn single(direction: Direction) -> Self {
        Path {
            reversed: vec![direction],
        }
    }

    /// Adds the step taken before the ones already stored
    fn push_earlier(&mut self, direction: Direction) {
        self.reversed.push(direction);
    }

    /// The move to execute from the current head
    pub fn first_move(&self) -> Direction {
        // Never empty: every path starts from `single`
        self.reversed[self.reversed.len() - 1]
    }

    /// Steps in build order (last step first)
    pub fn as_built(&self) -> &[Direction] {
        &self.reversed
    }

    /// Steps in the order they would be played
    pub fn steps(&self) -> impl Iterator<Item = Direction> + '_ {
        self.reversed.iter().rev().copied()
    }

    /// Number of moves from the head to the target, always at least one
    pub fn step_count(&self) -> usize {
        self.reversed.len()
    }
}

/// Board and head position as seen by one search frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchState {
    grid: Grid,
    head: Point,
    used_directions: Vec<Direction>,
    current_direction: Option<Direction>,
}

impl SearchState {
    pub fn new(grid: Grid, head: Point) -> Self {
        SearchState {
            grid,
            head,
            used_directions: Vec::with_capacity(4),
            current_direction: None,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn head(&self) -> Point {
        self.head
    }

    pub fn used_directions(&self) -> &[Direction] {
        &self.used_directions
    }

    pub fn current_direction(&self) -> Option<Direction> {
        self.current_direction
    }

    /// Independent copy of board and head for a new frame, with no directions tried yet
    pub fn branch(&self) -> SearchState {
        SearchState::new(self.grid.clone(), self.head)
    }

    /// A move is applicable when it stays on the board, lands on an empty cell
    /// and leaves enough room to escape afterwards
    pub fn is_direction_applicable(&self, direction: Direction) -> bool {
        let next = direction.apply(&self.head);
        self.grid.is_free(next) && escape::has_escape_path(&self.grid, next)
    }

    /// Advances the head and claims the new cell provisionally.
    /// Only call after `is_direction_applicable` returned true.
    pub fn apply_direction(&mut self, direction: Direction) {
        self.head = direction.apply(&self.head);
        self.grid.mark_provisional(self.head);
        self.current_direction = Some(direction);
    }

    /// Releases the current head cell and moves the head back to `previous`
    fn roll_back(&mut self, previous: Point) {
        self.grid.clear(self.head);
        self.head = previous;
        self.current_direction = None;
    }
}

/// Search driver holding the per-target call budget
#[derive(Debug)]
pub struct PathSearch {
    budget: usize,
    calls: usize,
    exhausted: bool,
}

impl PathSearch {
    pub fn new(budget: usize) -> Self {
        PathSearch {
            budget,
            calls: 0,
            exhausted: false,
        }
    }

    /// Number of recursive invocations so far
    pub fn calls(&self) -> usize {
        self.calls
    }

    /// True once the budget cut the search short
    pub fn budget_exceeded(&self) -> bool {
        self.exhausted
    }

    /// Looks for a path from the state's head to `to`.
    ///
    /// Returns `None` when every candidate fails or the call budget runs out; once
    /// the budget is exceeded the whole search unwinds without trying further
    /// candidates at any depth.
    pub fn find_path(&mut self, state: &SearchState, to: Point) -> Option<Path> {
        self.calls += 1;
        if self.calls > self.budget {
            self.exhausted = true;
            return None;
        }

        let mut frame = state.branch();
        let from = frame.head;

        for candidate in heuristic::ordered_directions(from, to) {
            let direction = candidate.direction;
            if frame.used_directions.contains(&direction) {
                continue;
            }
            frame.used_directions.push(direction);

            if !frame.is_direction_applicable(direction) {
                continue;
            }
            frame.apply_direction(direction);

            if frame.head == to {
                return Some(Path::single(direction));
            }

            if let Some(mut path) = self.find_path(&frame, to) {
                path.push_earlier(direction);
                return Some(path);
            }

            if self.exhausted {
                return None;
            }
            frame.roll_back(from);
        }

        None
    }
}
