//! Error types for the draughts engine
//!
//! Provides custom error types for engine operations including move
//! validation, square addressing, notation parsing and search invariants.

use thiserror::Error;

/// Errors that can occur in the draughts engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    /// Requested step is not in the currently legal move set
    #[error("Illegal move: from square {from} to square {to}")]
    IllegalMove { from: String, to: String },

    /// Coordinates outside the 10x10 grid
    #[error("Square ({row}, {col}) is off the board")]
    OffBoard { row: i8, col: i8 },

    /// Light square that is never addressed by play
    #[error("Square ({row}, {col}) is not a playable square")]
    NotPlayable { row: i8, col: i8 },

    /// Square number outside 1..=50
    #[error("Invalid square number: {number} (must be 1-50)")]
    InvalidSquareNumber { number: u32 },

    /// Move text that could not be parsed
    #[error("Cannot parse move notation '{text}'")]
    Notation { text: String },

    /// Search algorithm name not recognised
    #[error("Unknown search algorithm '{name}' (expected minimax, alphabeta or negamax)")]
    UnknownAlgorithm { name: String },

    /// Search invariant broken, the board drifted between make and undo
    #[error("Search algorithm error: {message}")]
    SearchError { message: String },
}

/// Result type alias for engine operations
pub type EngineResult<T> = Result<T, EngineError>;
