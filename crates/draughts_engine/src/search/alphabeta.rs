//! Minimax with alpha-beta pruning
//!
//! Same tree and sign convention as [`minimax`](super::minimax), but siblings
//! are abandoned as soon as the window closes:
//!
//! - `alpha`: best score White is already guaranteed on this path
//! - `beta`: best score Black is already guaranteed on this path
//!
//! Values strictly inside the window are exact; a value at or outside it is
//! only a bound, which the parent never prefers over what it already has.

use super::make_unmake::{play_line, take_back_line};
use super::{loss_score, SearchStats};
use crate::error::EngineResult;
use crate::evaluation::evaluate;
use crate::game::Game;

/// Alpha-beta value of the position, White positive
pub fn alphabeta(
    game: &mut Game,
    depth: u32,
    mut alpha: i32,
    mut beta: i32,
    stats: &mut SearchStats,
) -> EngineResult<i32> {
    stats.nodes += 1;

    let lines = game.legal_lines();
    if lines.is_empty() {
        return Ok(loss_score(game.side_to_move()));
    }
    if depth == 0 {
        return Ok(evaluate(game.board()));
    }

    let maximizing = game.white_to_move();
    let mut best = if maximizing { i32::MIN } else { i32::MAX };

    for line in &lines {
        play_line(game, line);
        let score = alphabeta(game, depth - 1, alpha, beta, stats);
        take_back_line(game, line)?;
        let score = score?;

        if maximizing {
            best = best.max(score);
            alpha = alpha.max(score);
        } else {
            best = best.min(score);
            beta = beta.min(score);
        }

        if alpha >= beta {
            stats.cutoffs += 1;
            break;
        }
    }

    Ok(best)
}
