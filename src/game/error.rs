//! Error types for game module
//!
//! Provides custom error types for the game session: engine rejections,
//! unreadable input and terminal I/O failures.

use draughts_engine::EngineError;

/// Errors that can occur in game logic
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    /// Move rejected or search invariant broken inside the engine
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Input that is neither a command nor a move
    #[error("Invalid input '{input}': {message}")]
    InvalidInput { input: String, message: String },

    /// Reading commands or writing the board failed
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for game operations
pub type GameResult<T> = Result<T, GameError>;
