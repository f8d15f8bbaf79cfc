//! Core module - settings and their persistence
//!
//! # Overview
//!
//! - [`GameSettings`] - User preferences (players, AI strength, game length)
//! - [`settings_persistence`] - JSON load/save in the platform config directory
//! - [`CoreError`] - Errors raised while reading or writing settings

pub mod error;
pub mod resources;
pub mod settings_persistence;

pub use error::{CoreError, CoreResult};
pub use resources::{GameSettings, DEFAULT_MAX_PLIES};
pub use settings_persistence::{load_settings, load_settings_from, save_settings, settings_path};
