//! Negamax with alpha-beta pruning
//!
//! Scores are relative to the side to move. Each child is searched with the
//! window negated and swapped, and its score negated on the way back up, so a
//! single maximizing branch serves both colors.

use super::make_unmake::{play_line, take_back_line};
use super::SearchStats;
use crate::constants::WIN_SCORE;
use crate::error::EngineResult;
use crate::evaluation::evaluate;
use crate::game::Game;

/// Negamax value of the position for the side to move
pub fn negamax(
    game: &mut Game,
    depth: u32,
    mut alpha: i32,
    beta: i32,
    stats: &mut SearchStats,
) -> EngineResult<i32> {
    stats.nodes += 1;

    let lines = game.legal_lines();
    if lines.is_empty() {
        return Ok(-WIN_SCORE);
    }
    if depth == 0 {
        return Ok(game.side_to_move().sign() * evaluate(game.board()));
    }

    let mut best = i32::MIN;

    for line in &lines {
        play_line(game, line);
        let score = negamax(game, depth - 1, -beta, -alpha, stats);
        take_back_line(game, line)?;
        let score = -score?;

        best = best.max(score);
        alpha = alpha.max(score);

        if alpha >= beta {
            stats.cutoffs += 1;
            break;
        }
    }

    Ok(best)
}
