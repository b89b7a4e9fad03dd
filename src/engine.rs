// Turn orchestration
//
// Builds a fresh grid and search state from the decoded snapshot, runs target
// selection and turns the winning path into this turn's move. Nothing here keeps
// state between calls, so concurrent turns for different games cannot interfere.

use log::{debug, warn};

use crate::config::Config;
use crate::error::MoveError;
use crate::grid::Grid;
use crate::search::{Path, SearchState};
use crate::targeting;
use crate::types::{Direction, Point, Snapshot};

/// A successful plan for the current turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnPlan {
    pub direction: Direction,
    pub target: Point,
    pub path: Path,
    pub calls: usize,
}

/// How the move for a turn was arrived at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Planned { target: Point, steps: usize },
    Fallback { reason: MoveError },
}

/// The move sent for a turn, always present, plus how it was chosen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TurnDecision {
    pub direction: Direction,
    pub outcome: Outcome,
}

/// Validates the snapshot, locates our head and marks every body on a new grid
pub fn build_state(snapshot: &Snapshot) -> Result<SearchState, MoveError> {
    snapshot.validate().map_err(MoveError::InvalidSnapshot)?;

    let own = snapshot.own_snake().ok_or_else(|| MoveError::NoOwnSnake {
        id: snapshot.you.clone(),
    })?;
    let head = own.head().ok_or_else(|| {
        MoveError::InvalidSnapshot(format!("snake '{}' has an empty body", own.id))
    })?;

    let grid = Grid::from_snakes(snapshot.width, snapshot.height, &snapshot.snakes);
    Ok(SearchState::new(grid, head))
}

/// Finds a path to the closest reachable food
pub fn plan_turn(snapshot: &Snapshot, call_budget: usize) -> Result<TurnPlan, MoveError> {
    let state = build_state(snapshot)?;
    plan_from_state(&state, &snapshot.food, call_budget)
}

/// Runs target selection on an already built search state
pub fn plan_from_state(
    state: &SearchState,
    food: &[Point],
    call_budget: usize,
) -> Result<TurnPlan, MoveError> {
    let target = targeting::select_target(state, food, call_budget).ok_or(
        MoveError::SearchExhausted {
            candidates: food.len(),
        },
    )?;

    Ok(TurnPlan {
        direction: target.path.first_move(),
        target: target.point,
        path: target.path,
        calls: target.calls,
    })
}

/// The single core operation: the move that starts the path to the chosen food
pub fn choose_direction(snapshot: &Snapshot, call_budget: usize) -> Result<Direction, MoveError> {
    plan_turn(snapshot, call_budget).map(|plan| plan.direction)
}

/// First direction, in up/down/left/right order, onto an in-bounds empty cell
pub fn safe_move(state: &SearchState) -> Option<Direction> {
    Direction::all()
        .into_iter()
        .find(|d| state.grid().is_free(d.apply(&state.head())))
}

/// Chooses a move and never fails: planning errors are mapped to the fallback policy
pub fn decide(snapshot: &Snapshot, config: &Config) -> TurnDecision {
    let state = match build_state(snapshot) {
        Ok(state) => state,
        Err(reason) => return fallback(None, reason, config),
    };

    match plan_from_state(&state, &snapshot.food, config.search.call_budget) {
        Ok(plan) => {
            debug!(
                "Planned {} towards ({}, {}): {} step(s), {} call(s)",
                plan.direction.as_str(),
                plan.target.x,
                plan.target.y,
                plan.path.step_count(),
                plan.calls
            );
            TurnDecision {
                direction: plan.direction,
                outcome: Outcome::Planned {
                    target: plan.target,
                    steps: plan.path.step_count(),
                },
            }
        }
        Err(reason) => fallback(Some(&state), reason, config),
    }
}

/// Fallback decision for a turn that produced no plan.
/// `state` is present when the snapshot was valid enough to build a board.
pub fn fallback(state: Option<&SearchState>, reason: MoveError, config: &Config) -> TurnDecision {
    let safe = match (&reason, state) {
        (MoveError::SearchExhausted { .. }, Some(state)) if config.fallback.prefer_safe_move => {
            safe_move(state)
        }
        _ => None,
    };
    let direction = safe.unwrap_or(config.fallback.direction);

    warn!("Falling back to {}: {}", direction.as_str(), reason);
    TurnDecision {
        direction,
        outcome: Outcome::Fallback { reason },
    }
}
