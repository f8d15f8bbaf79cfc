//! Text diagram of the 10×10 board
//!
//! Row 0 (Black's home row) is printed first. Light squares stay blank and
//! every row is labelled with the square numbers it holds, so a player can
//! read moves like `32-28` straight off the diagram.

use draughts_engine::board::piece_at;
use draughts_engine::constants::BOARD_SIZE;
use draughts_engine::types::{Board, Cell, Color, Rank, Square};

/// `w`/`b` for men, `W`/`B` for kings, `.` for an empty dark square
pub fn piece_glyph(cell: Cell) -> char {
    match cell {
        None => '.',
        Some(piece) => match (piece.color, piece.rank) {
            (Color::White, Rank::Man) => 'w',
            (Color::White, Rank::King) => 'W',
            (Color::Black, Rank::Man) => 'b',
            (Color::Black, Rank::King) => 'B',
        },
    }
}

/// Draw the board with row 0 on top. Light squares are blank and each row
/// ends with the range of square numbers it holds.
pub fn render_board(board: &Board) -> String {
    let mut out = String::new();
    for row in 0..BOARD_SIZE {
        let mut cells = Vec::with_capacity(BOARD_SIZE);
        for col in 0..BOARD_SIZE {
            let square = Square::new(row as i8, col as i8);
            cells.push(if square.is_playable() { piece_glyph(piece_at(board, square)) } else { ' ' });
        }
        let line: String = cells.iter().map(|c| format!(" {}", c)).collect();
        let first = row * BOARD_SIZE / 2 + 1;
        out.push_str(&format!("{}   {:>2}-{:>2}\n", line, first, first + BOARD_SIZE / 2 - 1));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use draughts_engine::board::{empty_board, init_board, set_cell};
    use draughts_engine::types::Piece;

    #[test]
    fn test_initial_board_rows() {
        let text = render_board(&init_board());
        let rows: Vec<&str> = text.lines().collect();
        assert_eq!(rows.len(), 10);
        assert_eq!(text.matches('\n').count(), 10);
        assert_eq!(rows[0], "   b   b   b   b   b    1- 5");
        assert_eq!(rows[4], "   .   .   .   .   .   21-25");
        assert_eq!(rows[9], " w   w   w   w   w     46-50");
    }

    #[test]
    fn test_kings_use_capitals() {
        let mut board = empty_board();
        set_cell(&mut board, Square::new(0, 1), Some(Piece::king(Color::White)));
        set_cell(&mut board, Square::new(9, 0), Some(Piece::king(Color::Black)));
        let text = render_board(&board);
        assert!(text.lines().next().is_some_and(|row| row.contains('W')));
        assert!(text.lines().last().is_some_and(|row| row.contains('B')));
        assert_eq!(piece_glyph(None), '.');
    }
}
