//! Man move generation
//!
//! ## Man Movement Rules
//!
//! - **Step**: one square diagonally forward (toward the opponent's back
//!   rank) onto an empty square
//! - **Capture**: in any of the four diagonal directions, jump an adjacent
//!   enemy piece onto the empty square directly behind it
//! - **Crowning**: decided at turn end, never here

use crate::board::*;
use crate::constants::DIAGONALS;
use crate::types::*;

/// Append the forward steps of the man on `from`
pub fn generate_steps(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    let forward = piece.color.forward();
    for dc in [-1, 1] {
        let to = from.offset(forward, dc);
        if to.is_on_board() && is_empty(board, to) {
            moves.push(Move::new(from, to, piece, None));
        }
    }
}

/// Append the single jumps of the man on `from`
pub fn generate_captures(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    for (dr, dc) in DIAGONALS {
        let over = from.offset(dr, dc);
        let to = over.offset(dr, dc);
        if !to.is_on_board() || !is_empty(board, to) {
            continue;
        }
        if let Some(victim) = piece_at(board, over) {
            if victim.color != piece.color {
                let capture = Capture { piece: victim, square: over };
                moves.push(Move::new(from, to, piece, Some(capture)));
            }
        }
    }
}
