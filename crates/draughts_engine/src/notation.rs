//! Square numbers and move notation
//!
//! The dark squares are numbered 1 to 50 row by row, starting at the top left
//! (row 0 holds squares 1-5, row 9 holds 46-50). Steps are written with those
//! numbers:
//!
//! - `32-28` a quiet step
//! - `28x19` a single jump
//! - `28x19x10` a whole chain, jump by jump

use crate::error::{EngineError, EngineResult};
use crate::types::{Move, Square};
use std::fmt;

/// Number of a playable square
pub fn square_number(square: Square) -> EngineResult<u8> {
    if !square.is_on_board() {
        return Err(EngineError::OffBoard { row: square.row, col: square.col });
    }
    square
        .number()
        .ok_or(EngineError::NotPlayable { row: square.row, col: square.col })
}

/// Square carrying `number` (1..=50)
pub fn square_from_number(number: u32) -> EngineResult<Square> {
    u8::try_from(number)
        .ok()
        .and_then(Square::from_number)
        .ok_or(EngineError::InvalidSquareNumber { number })
}

/// `from-to` or `fromxto`
pub fn format_step(mv: &Move) -> String {
    let sep = if mv.is_capture() { 'x' } else { '-' };
    format!("{}{}{}", mv.from, sep, mv.to)
}

/// A whole ply: one step, or a chain joined jump by jump (`28x19x10`)
pub fn format_line(line: &[Move]) -> String {
    let Some(first) = line.first() else {
        return String::new();
    };
    let mut text = format_step(first);
    for mv in &line[1..] {
        text.push('x');
        text.push_str(&mv.to.to_string());
    }
    text
}

/// Parse `from-to` or `fromxto` into its two squares.
///
/// Surrounding whitespace is ignored. The separator is not checked against
/// the kind of step, the caller matches the squares against the legal moves.
pub fn parse_step(text: &str) -> EngineResult<(Square, Square)> {
    let notation_error = || EngineError::Notation { text: text.to_string() };

    let trimmed = text.trim();
    let (from, to) = trimmed
        .split_once(['-', 'x', 'X'])
        .ok_or_else(notation_error)?;

    let from: u32 = from.trim().parse().map_err(|_| notation_error())?;
    let to: u32 = to.trim().parse().map_err(|_| notation_error())?;

    Ok((square_from_number(from)?, square_from_number(to)?))
}

/// Parse a whole ply: a single step, or a chain `28x19x10` expanded into
/// consecutive `(from, to)` jumps
pub fn parse_line(text: &str) -> EngineResult<Vec<(Square, Square)>> {
    let trimmed = text.trim();
    if trimmed.contains('-') {
        return Ok(vec![parse_step(trimmed)?]);
    }

    let squares = trimmed
        .split(['x', 'X'])
        .map(|part| {
            let number: u32 = part
                .trim()
                .parse()
                .map_err(|_| EngineError::Notation { text: text.to_string() })?;
            square_from_number(number)
        })
        .collect::<EngineResult<Vec<Square>>>()?;

    if squares.len() < 2 {
        return Err(EngineError::Notation { text: text.to_string() });
    }
    Ok(squares.windows(2).map(|pair| (pair[0], pair[1])).collect())
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_step(self))
    }
}
