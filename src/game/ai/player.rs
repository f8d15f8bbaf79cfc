//! AI move selection
//!
//! [`AiPlayer`] runs the engine search for the side to move and falls back to
//! a uniformly random legal line if the search comes back empty while legal
//! moves exist.

use crate::core::GameSettings;
use crate::game::error::GameResult;
use draughts_engine::game::Game;
use draughts_engine::notation::format_line;
use draughts_engine::search::{best_move, Algorithm, SearchStats};
use draughts_engine::types::Move;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;
use tracing::{info, warn};

/// AI move representation with engine statistics
#[derive(Debug, Clone)]
pub struct AIMove {
    /// One quiet step or every jump of a chain
    pub line: Vec<Move>,
    /// White-positive score, 0 for a fallback move
    pub score: i32,
    pub depth: u32,
    pub stats: SearchStats,
    pub thinking_time: f32,
    /// Picked at random because the search returned nothing
    pub fallback: bool,
}

/// Engine-backed player for one side
#[derive(Debug)]
pub struct AiPlayer {
    depth: u32,
    algorithm: Algorithm,
    rng: StdRng,
}

impl AiPlayer {
    /// `seed` makes the random fallback reproducible
    pub fn new(depth: u32, algorithm: Algorithm, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        Self { depth, algorithm, rng }
    }

    pub fn from_settings(settings: &GameSettings) -> Self {
        Self::new(settings.search_depth(), settings.algorithm, settings.seed)
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Choose the line to play. `Ok(None)` when the side to move has no
    /// legal move; the game is left as it was either way.
    pub fn choose(&mut self, game: &mut Game) -> GameResult<Option<AIMove>> {
        let start = Instant::now();
        let side = game.side_to_move();

        let result = best_move(game, self.depth, self.algorithm)?;
        let elapsed = start.elapsed().as_secs_f32();

        if let Some(found) = result {
            info!(
                "[AI] {} plays {} | Score={} | Depth={} | Nodes={} | Cutoffs={} | Time={:.2}s",
                side,
                format_line(&found.line),
                found.score,
                self.depth,
                found.stats.nodes,
                found.stats.cutoffs,
                elapsed
            );
            return Ok(Some(AIMove {
                line: found.line,
                score: found.score,
                depth: self.depth,
                stats: found.stats,
                thinking_time: elapsed,
                fallback: false,
            }));
        }

        let lines = game.legal_lines();
        if lines.is_empty() {
            info!("[AI] {} has no legal move", side);
            return Ok(None);
        }

        warn!("[AI] Search returned no move, attempting fallback move...");
        let pick = self.rng.random_range(0..lines.len());
        let line = lines[pick].clone();
        warn!("[AI] Fallback move: {}", format_line(&line));

        Ok(Some(AIMove {
            line,
            score: 0,
            depth: 0,
            stats: SearchStats::default(),
            thinking_time: elapsed,
            fallback: true,
        }))
    }
}
