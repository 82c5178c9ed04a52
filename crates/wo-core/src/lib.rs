//! Core types for Whiteout: items, exits, passage rules, rooms, and the world.
//!
//! This crate owns the data model the interaction engine mutates. A [`World`]
//! is assembled from flat tables of rooms, items, and one-way exits (usually a
//! JSON world file); the [`registry`] derives the far side of every exit and
//! installs the guarded passage rules.

/// Compass and vertical directions and token reversal.
pub mod direction;
/// Error types used throughout the crate.
pub mod error;
/// Exits and their world-file definitions.
pub mod exit;
/// Set-like container of carried items.
pub mod inventory;
/// Items and accessibility classes.
pub mod item;
/// Passage rules, shared gates, and the actor seam.
pub mod passage;
/// Forward/reverse exit construction and guarded-passage setup.
pub mod registry;
/// Rooms and their contents.
pub mod room;
/// The assembled world and world-file loading.
pub mod world;

/// Re-export direction types.
pub use direction::{Direction, reverse_token};
/// Re-export error types.
pub use error::{WoError, WoResult};
/// Re-export exit types.
pub use exit::{Exit, ExitConfig};
/// Re-export the inventory.
pub use inventory::Inventory;
/// Re-export item types.
pub use item::{Accessibility, Item, ItemConfig};
/// Re-export passage types.
pub use passage::{Actor, Gate, Passage, PassageRule};
/// Re-export room types.
pub use room::{Room, RoomConfig};
/// Re-export world types.
pub use world::{World, WorldData, WorldMeta};
