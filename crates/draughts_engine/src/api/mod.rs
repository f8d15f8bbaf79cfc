//! Public API for the draughts engine
//!
//! Provides high-level functions for game management, move entry by square
//! number, and AI move generation. Square numbers are the 1-50 numbering of
//! [`notation`](crate::notation).
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle (new_game, reset_game)
//! - `moves` - Move execution and validation (do_move, is_legal_move, undo_move)
//! - `state` - Game state queries and AI (get_game_state, reply)

mod game;
mod moves;
mod state;

pub use game::{new_game, reset_game};
pub use moves::{do_move, is_legal_move, undo_move, valid_moves_for_square};
pub use state::{get_game_state, reply, GameStatus};
