//! Rendering module - text output for the terminal session
//!
//! # Architecture
//!
//! - `board` - 10×10 board diagram with square numbers per row

pub mod board;

pub use board::{piece_glyph, render_board};
