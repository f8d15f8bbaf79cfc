//! # Draughts Engine Core Types
//!
//! ## Overview
//!
//! This module defines the value types shared by every other part of the
//! engine: colors, ranks, pieces, grid cells, squares and the single-step
//! [`Move`] record.
//!
//! ## Cells and the Board
//!
//! A [`Cell`] is `Option<Piece>`: `None` for an empty square, otherwise a
//! `(Color, Rank)` pair. The [`Board`] is a plain `10×10` array of cells, so
//! copying a cell is a two-byte copy and no square ever owns heap memory.
//!
//! ## Moves
//!
//! A [`Move`] is one atomic step: a quiet slide, or a single jump over one
//! enemy piece. A multi-jump is represented as an ordered `Vec<Move>` (a
//! *chain*). Moves are immutable once built. The piece that moved and the
//! piece that was captured are captured by value at construction time, which
//! is exactly what undo needs to restore the grid.
//!
//! Two moves are equal when their packed identifiers are equal. The identifier
//! encodes the start square, end square and captured square, so equality is
//! positional and does not depend on where the value came from.

use crate::constants::BOARD_SIZE;
use std::fmt;
use std::hash::{Hash, Hasher};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Side of a piece, and side to move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a forward step for men of this color
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Farthest row, where men of this color are crowned
    pub fn promotion_row(self) -> i8 {
        match self {
            Color::White => 0,
            Color::Black => (BOARD_SIZE - 1) as i8,
        }
    }

    /// `+1` for White, `-1` for Black
    pub fn sign(self) -> i32 {
        match self {
            Color::White => 1,
            Color::Black => -1,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rank {
    Man,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub rank: Rank,
}

impl Piece {
    pub const fn new(color: Color, rank: Rank) -> Self {
        Piece { color, rank }
    }

    pub const fn man(color: Color) -> Self {
        Piece::new(color, Rank::Man)
    }

    pub const fn king(color: Color) -> Self {
        Piece::new(color, Rank::King)
    }

    pub fn is_king(self) -> bool {
        self.rank == Rank::King
    }

    pub fn crowned(self) -> Self {
        Piece::king(self.color)
    }
}

/// Contents of one grid cell
pub type Cell = Option<Piece>;

/// The full 10×10 grid, indexed `[row][col]`
pub type Board = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// A grid coordinate.
///
/// Squares may be constructed off the board (generation steps past the edge
/// and then checks [`Square::is_on_board`]); every square stored in a
/// [`Move`] is on the board and playable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: i8,
    pub col: i8,
}

impl Square {
    pub const fn new(row: i8, col: i8) -> Self {
        Square { row, col }
    }

    #[inline]
    pub fn is_on_board(self) -> bool {
        (0..BOARD_SIZE as i8).contains(&self.row) && (0..BOARD_SIZE as i8).contains(&self.col)
    }

    /// Dark squares only: `(row + col)` odd
    #[inline]
    pub fn is_playable(self) -> bool {
        self.is_on_board() && (self.row + self.col) % 2 == 1
    }

    #[inline]
    pub fn offset(self, dr: i8, dc: i8) -> Square {
        Square::new(self.row + dr, self.col + dc)
    }

    /// Linear index `row * 10 + col` (0-99)
    #[inline]
    pub fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Square number 1..=50 counted row-major over the dark squares
    pub fn number(self) -> Option<u8> {
        if self.is_playable() {
            Some((self.index() / 2 + 1) as u8)
        } else {
            None
        }
    }

    pub fn from_number(number: u8) -> Option<Square> {
        if !(1..=50).contains(&number) {
            return None;
        }
        let idx = (number as usize - 1) * 2;
        let row = (idx / BOARD_SIZE) as i8;
        let col = (idx % BOARD_SIZE) as i8 + if row % 2 == 0 { 1 } else { 0 };
        Some(Square::new(row, col))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.number() {
            Some(n) => write!(f, "{}", n),
            None => write!(f, "({}, {})", self.row, self.col),
        }
    }
}

/// A captured enemy piece and the square it was taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Capture {
    pub piece: Piece,
    pub square: Square,
}

/// One atomic step of play
#[derive(Debug, Clone, Copy)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// Piece as it stood on `from` before the step
    pub piece: Piece,
    pub capture: Option<Capture>,
    /// A man lands on its farthest row. Crowning itself waits for turn end.
    pub promotes: bool,
    pub color: Color,
    id: u32,
}

/// Identifier slot used when a step captures nothing
const NO_CAPTURE_SLOT: u32 = 100;

impl Move {
    pub fn new(from: Square, to: Square, piece: Piece, capture: Option<Capture>) -> Self {
        let slot = capture.map_or(NO_CAPTURE_SLOT, |c| c.square.index() as u32);
        let id = (from.index() as u32 * 100 + to.index() as u32) * 101 + slot;
        Move {
            from,
            to,
            piece,
            capture,
            promotes: piece.rank == Rank::Man && to.row == piece.color.promotion_row(),
            color: piece.color,
            id,
        }
    }

    /// Packed positional identifier (start, end and captured square)
    #[inline]
    pub fn id(&self) -> u32 {
        self.id
    }

    #[inline]
    pub fn is_capture(&self) -> bool {
        self.capture.is_some()
    }

    pub fn captured_piece(&self) -> Option<Piece> {
        self.capture.map(|c| c.piece)
    }

    pub fn captured_square(&self) -> Option<Square> {
        self.capture.map(|c| c.square)
    }
}

impl PartialEq for Move {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Move {}

impl Hash for Move {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}
