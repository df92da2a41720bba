//! The two-stage validation gate a submission must pass before the game
//! state is advanced: state consistency first, then move-set legality.

use tracing::trace;

use super::board::{Position, Submission, Tick};

/// A single validation failure. Checks are independent and every failure is
/// collected, so the client sees the full list rather than the first hit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("gameId not specified")]
    MissingGameId,

    #[error("game board has incorrect size")]
    InvalidBoardSize,

    #[error("fruit has incorrect position")]
    InvalidFruitPosition,

    #[error("snake has incorrect position")]
    InvalidSnakePosition,

    #[error("snake has incorrect velocity")]
    InvalidSnakeVelocity,

    #[error("score cannot be negative")]
    NegativeScore,

    #[error("ticks are not specified")]
    MissingTicks,

    #[error("snake went out of bounds at ({x}, {y})")]
    SnakeOutOfBounds { x: i32, y: i32 },

    #[error("snake made an invalid move at tick {index}")]
    IllegalMove { index: usize },
}

/// Join accumulated errors into the newline-separated body the client sees
pub fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Check a declared game state for internal consistency.
///
/// An empty result means the state is valid.
pub fn validate_state(submission: &Submission) -> Vec<ValidationError> {
    let state = &submission.recv_state;
    let mut errors = Vec::new();

    if state.game_id.is_empty() {
        errors.push(ValidationError::MissingGameId);
    }

    if state.width <= 0 || state.height <= 0 {
        errors.push(ValidationError::InvalidBoardSize);
    }

    if !state.contains(state.fruit.x, state.fruit.y) {
        errors.push(ValidationError::InvalidFruitPosition);
    }

    if !state.contains(state.snake.x, state.snake.y) {
        errors.push(ValidationError::InvalidSnakePosition);
    }

    // Equal components cover the diagonals and the idle (0, 0) tick alike;
    // the client never emits either.
    if !(-1..=1).contains(&state.snake.vel_x)
        || !(-1..=1).contains(&state.snake.vel_y)
        || state.snake.vel_x == state.snake.vel_y
    {
        errors.push(ValidationError::InvalidSnakeVelocity);
    }

    if state.score < 0 {
        errors.push(ValidationError::NegativeScore);
    }

    if submission.ticks.is_empty() {
        errors.push(ValidationError::MissingTicks);
    }

    errors
}

/// Replay the tick batch backwards from the declared head position and
/// collect every bounds or turn-legality violation.
///
/// Ticks are ordered newest-first: each step subtracts the tick's
/// displacement from the later position to recover the position the snake
/// occupied before that tick was applied. An empty batch yields no errors
/// here; `validate_state` gates that case with `MissingTicks`.
pub fn validate_move_set(
    declared: Position,
    ticks: &[Tick],
    width: i32,
    height: i32,
    grid_step: i32,
) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut prev = declared;
    // No velocity precedes the newest tick, so its reversal check never fires.
    let mut prev_vel: Option<(i32, i32)> = None;

    for (index, tick) in ticks.iter().enumerate() {
        let curr = Position {
            x: prev.x - tick.vel_x * grid_step,
            y: prev.y - tick.vel_y * grid_step,
        };
        trace!(
            index,
            curr_x = curr.x,
            curr_y = curr.y,
            vel_x = tick.vel_x,
            vel_y = tick.vel_y,
            "backward walk step"
        );

        if curr.x < 0 || curr.x >= width || curr.y < 0 || curr.y >= height {
            errors.push(ValidationError::SnakeOutOfBounds {
                x: curr.x,
                y: curr.y,
            });
        }

        // An axis reverses when this (older) tick's nonzero velocity is the
        // negation of the chronologically later one: an instant 180° turn.
        let reverses = |later: i32, v: i32| v != 0 && -later == v;
        let reversal = match prev_vel {
            Some((later_x, later_y)) => {
                reverses(later_x, tick.vel_x) || reverses(later_y, tick.vel_y)
            }
            None => false,
        };
        if reversal || tick.vel_x == tick.vel_y {
            errors.push(ValidationError::IllegalMove { index });
        }

        prev = curr;
        prev_vel = Some((tick.vel_x, tick.vel_y));
    }

    errors
}
