//! Draughts AI opponent
//!
//! This module connects the engine search to the game session.
//!
//! # Architecture
//!
//! - [`PlayerKind`] / [`AIDifficulty`]: configuration, stored in settings
//! - [`AiPlayer`]: runs the fixed-depth search for its side
//! - [`AIMove`]: the chosen line plus engine statistics
//!
//! The AI hands back whole lines. The session plays them step by step
//! through the same validated path as human moves.

pub mod player;
pub mod resource;

// Re-export for convenience
pub use player::{AIMove, AiPlayer};
pub use resource::{AIDifficulty, PlayerKind};
