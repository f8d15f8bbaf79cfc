//! Material evaluation
//!
//! Evaluates the material balance of a position by counting piece values.

use crate::constants::*;
use crate::types::*;

/// Value of a single piece, independent of color
#[inline]
pub fn piece_value(piece: Piece) -> i32 {
    match piece.rank {
        Rank::Man => MAN_VALUE,
        Rank::King => KING_VALUE,
    }
}

/// Evaluate material balance: White's material minus Black's
pub fn evaluate(board: &Board) -> i32 {
    board
        .iter()
        .flatten()
        .flatten()
        .map(|piece| piece.color.sign() * piece_value(*piece))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{empty_board, init_board, set_cell};

    #[test]
    fn test_starting_position_material_balance() {
        let board = init_board();
        assert_eq!(evaluate(&board), 0, "Starting position should have 0 material balance");
    }

    #[test]
    fn test_white_up_a_king() {
        let mut board = init_board();
        set_cell(&mut board, Square::new(4, 5), Some(Piece::king(Color::White)));

        assert_eq!(evaluate(&board), KING_VALUE);
    }

    #[test]
    fn test_black_up_a_man() {
        let mut board = init_board();
        // Remove the white man on square 46
        set_cell(&mut board, Square::new(9, 0), None);

        assert_eq!(evaluate(&board), -MAN_VALUE, "Score should be exactly one man for Black");
    }

    #[test]
    fn test_empty_board_material() {
        assert_eq!(evaluate(&empty_board()), 0, "Empty board should have 0 material");
    }
}
