//! Move execution and validation
//!
//! Functions for executing moves and checking move legality by square number.

use crate::error::{EngineError, EngineResult};
use crate::game::{Game, Progress};
use crate::notation::square_from_number;
use crate::types::Move;

/// Execute one step on the board
///
/// # Arguments
///
/// * `game` - The game state
/// * `from` - Source square number (1-50)
/// * `to` - Destination square number (1-50)
///
/// # Returns
///
/// Whether the ply is over or a capture chain continues with the same side.
///
/// # Errors
///
/// [`EngineError::InvalidSquareNumber`] for numbers outside 1-50 and
/// [`EngineError::IllegalMove`] when no legal step joins the two squares. The
/// game is not modified on error.
///
/// # Examples
///
/// ```rust
/// use draughts_engine::api::{do_move, new_game};
/// use draughts_engine::game::Progress;
///
/// let mut game = new_game();
/// assert_eq!(do_move(&mut game, 31, 26), Ok(Progress::TurnComplete));
/// ```
pub fn do_move(game: &mut Game, from: u32, to: u32) -> EngineResult<Progress> {
    let from_sq = square_from_number(from)?;
    let to_sq = square_from_number(to)?;

    let mv = game
        .find_move(from_sq, to_sq)
        .ok_or_else(|| EngineError::IllegalMove {
            from: from.to_string(),
            to: to.to_string(),
        })?;
    game.make_move(&mv)
}

/// Check if a step is legal for the side to move
///
/// Out-of-range square numbers are simply not legal.
pub fn is_legal_move(game: &mut Game, from: u32, to: u32) -> bool {
    match (square_from_number(from), square_from_number(to)) {
        (Ok(from), Ok(to)) => game.find_move(from, to).is_some(),
        _ => false,
    }
}

/// Take back the last complete ply, or the jumps of a chain in progress
pub fn undo_move(game: &mut Game) -> Vec<Move> {
    game.undo_move()
}

/// Legal steps starting on square `number`, for highlighting
pub fn valid_moves_for_square(game: &mut Game, number: u32) -> EngineResult<Vec<Move>> {
    let square = square_from_number(number)?;
    Ok(game.valid_moves_for_square(square))
}
