//! Game state queries and AI move generation
//!
//! Functions for querying game state and generating AI moves.

use crate::error::EngineResult;
use crate::game::Game;
use crate::search::{best_move, Algorithm, SearchResult};
use crate::types::Color;

/// Whether the game goes on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    /// The other side has no legal move
    Won(Color),
}

/// Get current game state: the side to move without a legal move has lost
pub fn get_game_state(game: &mut Game) -> GameStatus {
    if game.has_legal_move() {
        GameStatus::InProgress
    } else {
        GameStatus::Won(game.side_to_move().opponent())
    }
}

/// Get AI's response to current position
///
/// # Arguments
///
/// * `game` - The game state, searched in place and restored
/// * `depth` - Search depth in plies
/// * `algorithm` - Search variant
///
/// `Ok(None)` means the side to move has no legal move.
pub fn reply(game: &mut Game, depth: u32, algorithm: Algorithm) -> EngineResult<Option<SearchResult>> {
    best_move(game, depth, algorithm)
}
