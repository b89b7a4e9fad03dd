// Occupancy grid used by the path search
//
// Cells are stored row-major. Every accessor is bounds-checked: reads outside the
// board return `None`, and callers are expected to test `is_inside` before writing.

use std::fmt;

use crate::types::{Point, Snake};

/// State of a single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    Empty,
    /// Occupied by a snake body segment
    Body,
    /// Claimed by the search itself while exploring a path
    Provisional,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Rectangular board of cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
    cells: Vec<Cell>,
}

impl Grid {
    /// Creates an empty grid. Non-positive dimensions yield a grid with no cells.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Grid {
            width,
            height,
            cells: vec![Cell::Empty; (width as usize) * (height as usize)],
        }
    }

    /// Builds the occupancy grid with every body segment of every snake marked
    pub fn from_snakes(width: i32, height: i32, snakes: &[Snake]) -> Self {
        let mut grid = Grid::new(width, height);
        for point in snakes.iter().flat_map(|s| s.coords.iter()) {
            grid.mark_occupied(*point);
        }
        grid
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn is_inside(&self, p: Point) -> bool {
        p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height
    }

    fn index(&self, p: Point) -> Option<usize> {
        if self.is_inside(p) {
            Some((p.y as usize) * (self.width as usize) + (p.x as usize))
        } else {
            None
        }
    }

    /// Cell state at `p`, or `None` outside the board
    pub fn get(&self, p: Point) -> Option<Cell> {
        self.index(p).map(|i| self.cells[i])
    }

    /// True only for in-bounds empty cells
    pub fn is_free(&self, p: Point) -> bool {
        self.get(p).map_or(false, |c| c.is_empty())
    }

    /// Writes a cell. Writing outside the board is a caller bug.
    pub fn set(&mut self, p: Point, cell: Cell) {
        debug_assert!(self.is_inside(p), "write outside grid at {:?}", p);
        if let Some(i) = self.index(p) {
            self.cells[i] = cell;
        }
    }

    pub fn mark_occupied(&mut self, p: Point) {
        self.set(p, Cell::Body);
    }

    pub fn mark_provisional(&mut self, p: Point) {
        self.set(p, Cell::Provisional);
    }

    pub fn clear(&mut self, p: Point) {
        self.set(p, Cell::Empty);
    }

    /// Number of cells currently in the given state
    pub fn count(&self, cell: Cell) -> usize {
        self.cells.iter().filter(|&&c| c == cell).count()
    }

    /// In-bounds 4-neighbours of `p`, in up/down/left/right order
    pub fn neighbours(&self, p: Point) -> impl Iterator<Item = Point> + '_ {
        crate::types::Direction::all()
            .into_iter()
            .map(move |d| d.apply(&p))
            .filter(move |n| self.is_inside(*n))
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..self.height {
            for x in 0..self.width {
                let symbol = match self.get(Point::new(x, y)) {
                    Some(Cell::Empty) | None => '.',
                    Some(Cell::Body) => '#',
                    Some(Cell::Provisional) => '+',
                };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
