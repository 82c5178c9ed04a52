//! Interaction engine for Whiteout.
//!
//! Turns player input into world mutations: a small verb parser, keyword
//! resolution against what the player can see, the take/drop/use/examine
//! verbs and their puzzle side effects, and a turn-based session that commits
//! moves at the end of each command.

/// Session configuration.
pub mod config;
/// Verb resolution against rooms and items.
pub mod engine;
/// Error types for the interaction engine.
pub mod error;
/// The player character.
pub mod mobile;
/// Toned output lines.
pub mod narration;
/// Command parsing and keyword resolution.
pub mod parser;
/// Examine reveals and use-verb dispatch tables.
pub mod puzzle;
/// Game session management.
pub mod session;

pub use config::GameConfig;
pub use error::{FictionError, FictionResult};
pub use mobile::Mobile;
pub use narration::{Narration, Tone};
pub use parser::{Command, parse_command};
pub use session::GameSession;
