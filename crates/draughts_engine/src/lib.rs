//! # Draughts Engine
//!
//! Rules engine and move search for international draughts on a 10×10 board.
//!
//! ## Overview
//!
//! - [`move_gen`] enumerates legal moves under the majority-capture rule:
//!   quiet steps when no capture exists, otherwise only the longest capture
//!   chains.
//! - [`coordinator`] and [`game`] let chains be played one jump at a time,
//!   with crowning at turn end and exact undo.
//! - [`search`] picks a line by fixed-depth minimax, alpha-beta or negamax,
//!   making and taking back moves on the live game instead of copying it.
//! - [`evaluation`] is pure material, White positive.
//! - [`api`] wraps the above by square number (1-50) for front ends.
//!
//! ## Example
//!
//! ```rust
//! use draughts_engine::api::{do_move, new_game, reply};
//! use draughts_engine::search::Algorithm;
//!
//! let mut game = new_game();
//! do_move(&mut game, 32, 28).unwrap();
//! let answer = reply(&mut game, 3, Algorithm::AlphaBeta).unwrap();
//! assert!(answer.is_some());
//! ```

pub mod api;
pub mod board;
pub mod constants;
pub mod coordinator;
pub mod error;
pub mod evaluation;
pub mod game;
pub mod move_gen;
pub mod notation;
pub mod search;
pub mod types;

pub use error::{EngineError, EngineResult};
pub use game::{Game, Progress};
pub use move_gen::{generate_moves, MoveSet};
pub use search::{best_move, Algorithm, SearchResult, SearchStats};
pub use types::{Color, Move, Piece, Rank, Square};
