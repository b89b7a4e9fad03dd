// Escape-viability check
//
// After a tentative move, count the free cells reachable from the new head and
// compare against half of all body segments on the board. Too little room means
// the move walks into a pocket the snake cannot survive in.

use std::collections::VecDeque;

use crate::grid::{Cell, Grid};
use crate::types::Point;

/// Outcome of one viability check, kept for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EscapeReport {
    pub reachable: usize,
    pub body_length: usize,
}

impl EscapeReport {
    /// Reachable space must strictly exceed half the body cells (integer division)
    pub fn is_viable(&self) -> bool {
        self.reachable > self.body_length / 2
    }
}

/// Counts empty cells 4-connected to `head`, excluding `head` itself.
/// Occupied and provisional cells block the fill.
pub fn reachable_free_cells(grid: &Grid, head: Point) -> usize {
    let width = grid.width().max(0) as usize;
    let height = grid.height().max(0) as usize;
    let mut visited = vec![false; width * height];
    let mut queue = VecDeque::new();

    let visit = |p: Point, visited: &mut Vec<bool>| -> bool {
        if p == head || !grid.is_free(p) {
            return false;
        }
        let idx = (p.y as usize) * width + (p.x as usize);
        if visited[idx] {
            return false;
        }
        visited[idx] = true;
        true
    };

    for n in grid.neighbours(head) {
        if visit(n, &mut visited) {
            queue.push_back(n);
        }
    }

    let mut count = 0;
    while let Some(p) = queue.pop_front() {
        count += 1;
        for n in grid.neighbours(p) {
            if visit(n, &mut visited) {
                queue.push_back(n);
            }
        }
    }

    count
}

/// Evaluates the board as it would look with the head moved onto `new_head`
pub fn assess(grid: &Grid, new_head: Point) -> EscapeReport {
    EscapeReport {
        reachable: reachable_free_cells(grid, new_head),
        body_length: grid.count(Cell::Body),
    }
}

pub fn has_escape_path(grid: &Grid, new_head: Point) -> bool {
    assess(grid, new_head).is_viable()
}
