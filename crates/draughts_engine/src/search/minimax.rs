//! Plain minimax

use super::make_unmake::{play_line, take_back_line};
use super::{loss_score, SearchStats};
use crate::constants::AB_INF;
use crate::error::EngineResult;
use crate::evaluation::evaluate;
use crate::game::Game;

/// Minimax value of the position, White positive.
///
/// White nodes take the maximum over their lines, Black nodes the minimum.
pub fn minimax(game: &mut Game, depth: u32, stats: &mut SearchStats) -> EngineResult<i32> {
    stats.nodes += 1;

    let lines = game.legal_lines();
    if lines.is_empty() {
        return Ok(loss_score(game.side_to_move()));
    }
    if depth == 0 {
        return Ok(evaluate(game.board()));
    }

    let maximizing = game.white_to_move();
    let mut best = if maximizing { -AB_INF } else { AB_INF };

    for line in &lines {
        play_line(game, line);
        let score = minimax(game, depth - 1, stats);
        take_back_line(game, line)?;
        let score = score?;

        best = if maximizing { best.max(score) } else { best.min(score) };
    }

    Ok(best)
}
