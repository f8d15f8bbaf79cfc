//! User settings
//!
//! [`GameSettings`] holds every preference the player can change: who plays
//! which side, how strong the AI is, and when a game is adjourned. It is
//! serialized to JSON by [`settings_persistence`](super::settings_persistence).

use super::error::{CoreError, CoreResult};
use crate::game::ai::{AIDifficulty, PlayerKind};
use draughts_engine::constants::MAX_DEPTH;
use draughts_engine::search::Algorithm;
use draughts_engine::types::Color;
use serde::{Deserialize, Serialize};

/// Default number of plies after which a game is adjourned
pub const DEFAULT_MAX_PLIES: u32 = 200;

/// User preferences
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// AI strength, mapped to a fixed search depth
    pub difficulty: AIDifficulty,

    /// Explicit search depth, overrides the difficulty when set
    pub depth: Option<u32>,

    /// Search variant used by AI players
    pub algorithm: Algorithm,

    /// Controller of the white pieces
    pub white: PlayerKind,

    /// Controller of the black pieces
    pub black: PlayerKind,

    /// Plies played before the game is adjourned
    pub max_plies: u32,

    /// Seed for the AI's random fallback; fresh entropy when unset
    pub seed: Option<u64>,
}

impl Default for GameSettings {
    /// Human plays White against a medium AI
    fn default() -> Self {
        Self {
            difficulty: AIDifficulty::Medium,
            depth: None,
            algorithm: Algorithm::AlphaBeta,
            white: PlayerKind::Human,
            black: PlayerKind::Ai,
            max_plies: DEFAULT_MAX_PLIES,
            seed: None,
        }
    }
}

impl GameSettings {
    /// Depth the AI searches: the override if set, else the difficulty's
    pub fn search_depth(&self) -> u32 {
        self.depth
            .unwrap_or_else(|| self.difficulty.search_depth())
            .clamp(1, MAX_DEPTH)
    }

    pub fn player(&self, color: Color) -> PlayerKind {
        match color {
            Color::White => self.white,
            Color::Black => self.black,
        }
    }

    /// Reject values the session cannot run with
    pub fn validate(&self) -> CoreResult<()> {
        if let Some(depth) = self.depth {
            if depth == 0 || depth > MAX_DEPTH {
                return Err(CoreError::InvalidSetting {
                    field: "depth".to_string(),
                    message: format!("must be between 1 and {}, got {}", MAX_DEPTH, depth),
                });
            }
        }
        if self.max_plies == 0 {
            return Err(CoreError::InvalidSetting {
                field: "max_plies".to_string(),
                message: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }
}
