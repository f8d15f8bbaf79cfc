//! # Draughts Engine Constants - Board Geometry, Material Values & Search Bounds
//!
//! ## Board Geometry
//!
//! The game is played on a 10×10 grid. Only the dark squares, those where
//! `(row + col)` is odd, are ever occupied; the light half of the grid stays
//! empty for the lifetime of a game but is kept so that cells can be indexed
//! uniformly by `(row, col)`.
//!
//! Row 0 is Black's back rank and row 9 is White's back rank. White men move
//! toward row 0, Black men toward row 9.
//!
//! ## Material Valuation
//!
//! Evaluation is pure material with a **white-positive** sign convention:
//!
//! - **Man**: 1
//! - **King**: 3
//!
//! With at most 20 pieces per side the material differential can never exceed
//! 60, which keeps every static score strictly inside the terminal scores.
//!
//! ## Search Bounds
//!
//! A side with no legal move has lost. That outcome is scored `±WIN_SCORE`
//! (100), independent of material, and the root alpha-beta window is opened to
//! `±AB_INF` (255) so the terminal scores always fit inside it.

/// Cells per row and per column
pub const BOARD_SIZE: usize = 10;

/// Dark squares on the board, numbered 1..=50
pub const PLAYABLE_SQUARES: usize = 50;

/// Rows filled with men for each side at the start of a game
pub const INITIAL_ROWS: usize = 4;

pub const MAN_VALUE: i32 = 1;
pub const KING_VALUE: i32 = 3;

/// Score of a position in which the side to move has no legal move
pub const WIN_SCORE: i32 = 100;

/// Root alpha-beta window half-width
pub const AB_INF: i32 = 255;

/// Default fixed search depth in plies
pub const DEFAULT_DEPTH: u32 = 4;

/// Deepest search the engine accepts
pub const MAX_DEPTH: u32 = 12;

/// The four diagonal directions as `(row, col)` deltas.
///
/// Generation order follows this table, which in turn fixes the tie-break
/// order of the search.
pub const DIAGONALS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];
