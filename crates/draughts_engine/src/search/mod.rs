//! Fixed-depth adversarial search
//!
//! This module implements the AI move selection:
//! - Plain minimax (White maximizes, Black minimizes)
//! - Minimax with alpha-beta pruning
//! - Negamax with alpha-beta pruning (side-relative scores, negated window)
//!
//! The search runs on the live [`Game`](crate::game::Game): every candidate is
//! made in place, searched, and taken back before the next sibling. A ply is a
//! whole line (one quiet step or one full capture chain), so the opponent
//! never gets a turn in the middle of a chain.
//!
//! Node rules, shared by all three variants:
//! 1. No legal move for the side to move: loss, `±WIN_SCORE`
//! 2. Depth exhausted: material evaluation
//! 3. Otherwise: recurse into every line in generation order
//!
//! All counters live in a [`SearchStats`] owned by the caller of
//! [`best_move`], so searches never share state.
//!
//! ## Module Organization
//!
//! - `minimax` - Plain minimax
//! - `alphabeta` - Minimax with alpha-beta pruning
//! - `negamax` - Negamax with alpha-beta pruning
//! - `make_unmake` - Playing and taking back whole lines
//! - `root` - Root move selection

mod alphabeta;
mod make_unmake;
mod minimax;
mod negamax;
mod root;

pub use alphabeta::alphabeta;
pub use minimax::minimax;
pub use negamax::negamax;
pub use root::best_move;

use crate::constants::WIN_SCORE;
use crate::error::EngineError;
use crate::types::{Color, Move};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Search variant used by [`best_move`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    Minimax,
    #[default]
    AlphaBeta,
    Negamax,
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Minimax => "minimax",
            Algorithm::AlphaBeta => "alphabeta",
            Algorithm::Negamax => "negamax",
        };
        f.write_str(name)
    }
}

impl FromStr for Algorithm {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "minimax" => Ok(Algorithm::Minimax),
            "alphabeta" | "alpha-beta" => Ok(Algorithm::AlphaBeta),
            "negamax" => Ok(Algorithm::Negamax),
            _ => Err(EngineError::UnknownAlgorithm { name: s.to_string() }),
        }
    }
}

/// Counters for one search request
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, root children included
    pub nodes: u64,
    /// Sibling loops abandoned because `alpha >= beta`
    pub cutoffs: u64,
}

/// The line chosen at the root
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// One quiet step, or every jump of a capture chain
    pub line: Vec<Move>,
    /// Score of the line, White positive
    pub score: i32,
    pub stats: SearchStats,
}

/// Score of a node whose side to move has no legal move, White positive
#[inline]
pub(crate) fn loss_score(side: Color) -> i32 {
    -side.sign() * WIN_SCORE
}

#[cfg(test)]
mod tests;
