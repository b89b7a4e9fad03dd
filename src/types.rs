// Battlesnake API Types
// Legacy (2017) request/response shapes: points travel as `[x, y]` arrays.

use serde::{Deserialize, Serialize};

/// 2D coordinate on the board, encoded on the wire as `[x, y]`
#[derive(Deserialize, Serialize, Debug, PartialEq, Eq, Clone, Copy, Hash)]
#[serde(from = "[i32; 2]", into = "[i32; 2]")]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Point { x, y }
    }

    /// Squared Euclidean distance, exact in integers
    pub fn distance_squared(&self, other: &Point) -> i64 {
        let dx = i64::from(other.x - self.x);
        let dy = i64::from(other.y - self.y);
        dx * dx + dy * dy
    }
}

impl From<[i32; 2]> for Point {
    fn from(coords: [i32; 2]) -> Self {
        Point {
            x: coords[0],
            y: coords[1],
        }
    }
}

impl From<Point> for [i32; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

/// Represents the four possible movement directions for a Battlesnake
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Returns all possible directions, in tie-breaking order
    pub fn all() -> [Direction; 4] {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }

    /// Converts direction to string representation for API response
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }

    /// Parses a direction token, ignoring case
    pub fn parse(s: &str) -> Result<Direction, String> {
        match s.to_lowercase().as_str() {
            "up" => Ok(Direction::Up),
            "down" => Ok(Direction::Down),
            "left" => Ok(Direction::Left),
            "right" => Ok(Direction::Right),
            _ => Err(format!("Invalid direction: {}", s)),
        }
    }

    /// Unit offset of this direction. Y grows downwards.
    pub fn delta(&self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Calculates the next coordinate when moving in this direction
    pub fn apply(&self, point: &Point) -> Point {
        let (dx, dy) = self.delta();
        Point {
            x: point.x + dx,
            y: point.y + dy,
        }
    }
}

/// Snake representation as sent by the game server
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Snake {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub taunt: String,
    #[serde(default)]
    pub health_points: i32,
    pub coords: Vec<Point>,
}

impl Snake {
    /// First body coordinate, if the snake has a body at all
    pub fn head(&self) -> Option<Point> {
        self.coords.first().copied()
    }
}

/// Decoded per-turn view of the board: dimensions, every snake and the food
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub width: i32,
    pub height: i32,
    pub you: String,
    pub snakes: Vec<Snake>,
    pub food: Vec<Point>,
}

/// Largest board the engine will allocate a grid for
pub const MAX_BOARD_CELLS: usize = 1_000_000;

impl Snapshot {
    /// Checks dimensions and that every coordinate lies on the board
    pub fn validate(&self) -> Result<(), String> {
        if self.width <= 0 || self.height <= 0 {
            return Err(format!(
                "board dimensions must be positive, got {}x{}",
                self.width, self.height
            ));
        }

        let cells = (self.width as usize).checked_mul(self.height as usize);
        if cells.map_or(true, |cells| cells > MAX_BOARD_CELLS) {
            return Err(format!(
                "board {}x{} exceeds the {} cell limit",
                self.width, self.height, MAX_BOARD_CELLS
            ));
        }

        let on_board =
            |p: &Point| p.x >= 0 && p.x < self.width && p.y >= 0 && p.y < self.height;

        for snake in &self.snakes {
            if let Some(p) = snake.coords.iter().find(|p| !on_board(p)) {
                return Err(format!(
                    "snake '{}' has coordinate ({}, {}) outside the board",
                    snake.id, p.x, p.y
                ));
            }
        }

        if let Some(p) = self.food.iter().find(|p| !on_board(p)) {
            return Err(format!("food ({}, {}) outside the board", p.x, p.y));
        }

        Ok(())
    }

    /// Finds the snake controlled by this bot
    pub fn own_snake(&self) -> Option<&Snake> {
        self.snakes.iter().find(|s| s.id == self.you)
    }
}

/// POST /start body
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct GameStartRequest {
    pub game_id: String,
    pub width: i32,
    pub height: i32,
}

/// POST /start response
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct GameStartResponse {
    pub color: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub head_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taunt: Option<String>,
}

/// POST /move body
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct MoveRequest {
    #[serde(default)]
    pub game_id: String,
    #[serde(default)]
    pub turn: i32,
    #[serde(flatten)]
    pub snapshot: Snapshot,
}

/// POST /move response
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct MoveResponse {
    #[serde(rename = "move")]
    pub direction: Direction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub taunt: Option<String>,
}
