//! AI configuration types for player control and difficulty
//!
//! # Player Control
//!
//! Each side is played either by a human at the terminal or by the AI:
//! - **Human**: moves are read as square-number notation
//! - **Ai**: moves come from the engine search
//!
//! # Difficulty Levels
//!
//! AI difficulty is a fixed search depth. There is no time management; a
//! search always runs to its full depth.
//!
//! | Difficulty | Depth  |
//! |------------|--------|
//! | Easy       | 2 ply  |
//! | Medium     | 4 ply  |
//! | Hard       | 6 ply  |

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Who moves the pieces of one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum PlayerKind {
    Human,
    Ai,
}

impl fmt::Display for PlayerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerKind::Human => write!(f, "human"),
            PlayerKind::Ai => write!(f, "AI"),
        }
    }
}

/// AI difficulty levels corresponding to search depth
///
/// # Examples
///
/// ```rust
/// use xfdraughts::game::ai::AIDifficulty;
///
/// assert_eq!(AIDifficulty::Medium.search_depth(), 4);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
pub enum AIDifficulty {
    /// Easy - 2 ply, sees only its own move and the immediate answer
    Easy,

    /// Medium - 4 ply, the default
    #[default]
    Medium,

    /// Hard - 6 ply, noticeably slower in positions full of captures
    Hard,
}

impl AIDifficulty {
    /// Get the fixed search depth for this difficulty level
    pub fn search_depth(self) -> u32 {
        match self {
            AIDifficulty::Easy => 2,
            AIDifficulty::Medium => 4,
            AIDifficulty::Hard => 6,
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            AIDifficulty::Easy => "Easy (2 ply)",
            AIDifficulty::Medium => "Medium (4 ply)",
            AIDifficulty::Hard => "Hard (6 ply)",
        }
    }
}
