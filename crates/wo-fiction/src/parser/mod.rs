//! Command parsing and keyword resolution.

mod command;
mod resolver;

pub use command::{Command, parse_command};
pub use resolver::{resolve_any_item, resolve_exit, resolve_held_item, resolve_room_item};
