//! Game lifecycle management
//!
//! Functions for creating and resetting games.

use crate::game::Game;

/// Create a new game with initial position
pub fn new_game() -> Game {
    Game::new()
}

/// Reset the game to starting position
pub fn reset_game(game: &mut Game) {
    game.reset();
}
