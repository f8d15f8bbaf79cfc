//! Line making and unmaking for search
//!
//! Provides functions to play a whole ply on the live game and to take it
//! back step by step, checking that the log unwinds exactly what was played.

use crate::error::{EngineError, EngineResult};
use crate::game::Game;
use crate::notation::format_line;
use crate::types::Move;

/// Play every step of `line`
pub(crate) fn play_line(game: &mut Game, line: &[Move]) {
    for mv in line {
        game.apply_unchecked(*mv);
    }
}

/// Take back every step of `line`, most recent first
pub(crate) fn take_back_line(game: &mut Game, line: &[Move]) -> EngineResult<()> {
    for expected in line.iter().rev() {
        match game.undo_step() {
            Some(undone) if undone == *expected => {}
            _ => {
                return Err(EngineError::SearchError {
                    message: format!("move log out of step while taking back {}", format_line(line)),
                })
            }
        }
    }
    Ok(())
}
