//! Root move selection
//!
//! Scores every legal line of the side to move and keeps the best one. Each
//! candidate is compared from the mover's point of view, and only a strictly
//! better score replaces the current choice, so among equal scores the line
//! generated first wins.

use super::make_unmake::{play_line, take_back_line};
use super::{alphabeta, minimax, negamax, Algorithm, SearchResult, SearchStats};
use crate::constants::{AB_INF, MAX_DEPTH};
use crate::error::EngineResult;
use crate::game::Game;
use crate::notation::format_line;
use tracing::debug;

/// Find the best line for the side to move.
///
/// `depth` counts plies including the root's own; depth 0 is treated as 1 so
/// a move is always chosen when one exists. Returns `Ok(None)` when the side
/// to move has no legal move, which means it has lost.
///
/// The game is searched in place and is back in its original state when this
/// returns `Ok`.
///
/// # Examples
///
/// ```rust
/// use draughts_engine::game::Game;
/// use draughts_engine::search::{best_move, Algorithm};
///
/// let mut game = Game::new();
/// let result = best_move(&mut game, 2, Algorithm::AlphaBeta).unwrap().unwrap();
/// assert_eq!(result.line.len(), 1);
/// ```
pub fn best_move(
    game: &mut Game,
    depth: u32,
    algorithm: Algorithm,
) -> EngineResult<Option<SearchResult>> {
    let lines = game.legal_lines();
    if lines.is_empty() {
        debug!(side = %game.side_to_move(), "no legal move at root");
        return Ok(None);
    }

    let depth = depth.clamp(1, MAX_DEPTH);
    let child_depth = depth - 1;
    let sign = game.side_to_move().sign();
    let mut stats = SearchStats::default();

    // Window in the mover's terms; only the lower bound moves at the root
    let mut alpha = -AB_INF;
    let beta = AB_INF;
    let mut best: Option<(usize, i32)> = None;

    for (index, line) in lines.iter().enumerate() {
        play_line(game, line);
        let score = match algorithm {
            Algorithm::Minimax => minimax(game, child_depth, &mut stats).map(|s| sign * s),
            Algorithm::AlphaBeta => {
                let (lo, hi) = if sign > 0 { (alpha, beta) } else { (-beta, -alpha) };
                alphabeta(game, child_depth, lo, hi, &mut stats).map(|s| sign * s)
            }
            Algorithm::Negamax => negamax(game, child_depth, -beta, -alpha, &mut stats).map(|s| -s),
        };
        take_back_line(game, line)?;
        let score = score?;

        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
        if algorithm != Algorithm::Minimax {
            alpha = alpha.max(score);
        }
    }

    let Some((index, score)) = best else {
        return Ok(None);
    };
    let line = lines[index].clone();
    let score = sign * score;

    debug!(
        %algorithm,
        depth,
        nodes = stats.nodes,
        cutoffs = stats.cutoffs,
        score,
        line = %format_line(&line),
        "search complete"
    );

    Ok(Some(SearchResult { line, score, stats }))
}
