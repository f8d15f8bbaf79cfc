//! Static evaluation
//!
//! Scores a grid by material alone, White positive:
//! - Man: [`MAN_VALUE`](crate::constants::MAN_VALUE)
//! - King: [`KING_VALUE`](crate::constants::KING_VALUE)
//!
//! ## Module Organization
//!
//! - `material` - Material balance evaluation

mod material;

pub use material::{evaluate, piece_value};
