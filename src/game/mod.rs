//! Game module - terminal play on top of the draughts engine
//!
//! # Module Organization
//!
//! - `ai` - AI opponent configuration and move choice
//! - `session` - Turn loop, human commands, undo and game end
//! - `error` - Session error type
//!
//! All rules live in the `draughts_engine` crate. This module only decides
//! who moves and feeds their steps through [`draughts_engine::game::Game`].

pub mod ai;
pub mod error;
pub mod session;

pub use error::{GameError, GameResult};
pub use session::{Command, Controller, Session, SessionOutcome};
