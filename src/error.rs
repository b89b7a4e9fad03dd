// Error taxonomy for a single move decision

use std::fmt;

/// Reasons the engine could not produce a planned move for a turn.
/// All of them are recoverable: the caller answers with a fallback move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    /// Snapshot failed validation (bad dimensions or coordinates off the board)
    InvalidSnapshot(String),
    /// No snake in the snapshot carries our id
    NoOwnSnake { id: String },
    /// Every food target was tried and none produced a path within budget
    SearchExhausted { candidates: usize },
    /// The blocking task running the search panicked or was cancelled
    SearchTaskFailed(String),
}

impl fmt::Display for MoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveError::InvalidSnapshot(reason) => write!(f, "invalid snapshot: {}", reason),
            MoveError::NoOwnSnake { id } => write!(f, "no snake with id '{}' on the board", id),
            MoveError::SearchExhausted { candidates } => {
                write!(f, "no path found to any of {} food target(s)", candidates)
            }
            MoveError::SearchTaskFailed(reason) => write!(f, "search task failed: {}", reason),
        }
    }
}

impl std::error::Error for MoveError {}
