pub mod core;
pub mod game;
pub mod rendering;

pub use game::{Session, SessionOutcome};
