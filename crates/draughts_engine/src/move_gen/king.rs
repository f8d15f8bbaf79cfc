//! King move generation
//!
//! Kings fly: they slide any distance along the four diagonals.
//!
//! - **Step**: every empty square along a diagonal up to the first occupied
//!   square or the edge
//! - **Capture**: slide over empty squares to the first occupied square; if it
//!   holds an enemy piece and at least one empty square lies directly beyond
//!   it, every consecutive empty square beyond is a legal landing square.
//!   An ally, or an enemy with no empty square behind it, blocks the diagonal.

use crate::board::*;
use crate::constants::DIAGONALS;
use crate::types::*;

/// Append the sliding steps of the king on `from`
pub fn generate_steps(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    for (dr, dc) in DIAGONALS {
        let mut to = from.offset(dr, dc);
        while to.is_on_board() && is_empty(board, to) {
            moves.push(Move::new(from, to, piece, None));
            to = to.offset(dr, dc);
        }
    }
}

/// Append the jumps of the king on `from`, one per landing square
pub fn generate_captures(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    for (dr, dc) in DIAGONALS {
        let mut over = from.offset(dr, dc);
        while over.is_on_board() && is_empty(board, over) {
            over = over.offset(dr, dc);
        }
        if !over.is_on_board() {
            continue;
        }

        let victim = match piece_at(board, over) {
            Some(p) if p.color != piece.color => p,
            _ => continue,
        };

        let mut to = over.offset(dr, dc);
        while to.is_on_board() && is_empty(board, to) {
            let capture = Capture { piece: victim, square: over };
            moves.push(Move::new(from, to, piece, Some(capture)));
            to = to.offset(dr, dc);
        }
    }
}
