//! Board utilities and helper functions
//!
//! Provides fundamental grid operations used throughout the engine:
//! - Initial and empty layouts
//! - Cell queries by [`Square`]
//! - Raw step application and reversal (no turn or chain bookkeeping)

use super::constants::*;
use super::types::*;

/// An empty grid
pub fn empty_board() -> Board {
    [[None; BOARD_SIZE]; BOARD_SIZE]
}

/// Initialize a grid to the standard starting position.
///
/// Black men fill the dark squares of rows 0-3, White men rows 6-9.
pub fn init_board() -> Board {
    let mut board = empty_board();
    for sq in playable_squares() {
        let row = sq.row as usize;
        if row < INITIAL_ROWS {
            board[row][sq.col as usize] = Some(Piece::man(Color::Black));
        } else if row >= BOARD_SIZE - INITIAL_ROWS {
            board[row][sq.col as usize] = Some(Piece::man(Color::White));
        }
    }
    board
}

/// All dark squares in row-major order (square numbers 1..=50)
pub fn playable_squares() -> impl Iterator<Item = Square> {
    (1..=PLAYABLE_SQUARES as u8).filter_map(Square::from_number)
}

/// Get the cell at a square. The square must be on the board.
#[inline]
pub fn piece_at(board: &Board, sq: Square) -> Cell {
    board[sq.row as usize][sq.col as usize]
}

#[inline]
pub fn set_cell(board: &mut Board, sq: Square, cell: Cell) {
    board[sq.row as usize][sq.col as usize] = cell;
}

/// Check if an on-board square is empty
#[inline]
pub fn is_empty(board: &Board, sq: Square) -> bool {
    piece_at(board, sq).is_none()
}

/// Check if a cell holds a piece of the given color
#[inline]
pub fn piece_belongs_to(cell: Cell, color: Color) -> bool {
    matches!(cell, Some(p) if p.color == color)
}

/// Number of pieces a side has on the board
pub fn count_pieces(board: &Board, color: Color) -> usize {
    board
        .iter()
        .flatten()
        .filter(|cell| piece_belongs_to(**cell, color))
        .count()
}

/// Apply one step to the grid: vacate the start, occupy the end, remove the
/// captured piece if any.
#[inline]
pub fn apply_step(board: &mut Board, mv: &Move) {
    set_cell(board, mv.from, None);
    set_cell(board, mv.to, Some(mv.piece));
    if let Some(capture) = mv.capture {
        set_cell(board, capture.square, None);
    }
}

/// Exact inverse of [`apply_step`]. Also undoes a crowning on `mv.to`, since
/// the start square gets back the piece as it was before the step.
#[inline]
pub fn revert_step(board: &mut Board, mv: &Move) {
    set_cell(board, mv.to, None);
    set_cell(board, mv.from, Some(mv.piece));
    if let Some(capture) = mv.capture {
        set_cell(board, capture.square, Some(capture.piece));
    }
}
