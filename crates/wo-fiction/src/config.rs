//! Configuration for a game session.

use std::path::{Path, PathBuf};

use wo_core::World;

use crate::error::FictionResult;

/// Configuration for a game session.
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// World file to load; the bundled world when `None`.
    pub world: Option<PathBuf>,
    /// Whether front ends should colour narration by tone.
    pub color: bool,
    /// Whether room descriptions end with a list of exits.
    pub list_exits: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            world: None,
            color: true,
            list_exits: true,
        }
    }
}

impl GameConfig {
    /// Load the world from a file instead of the bundled one.
    pub fn with_world(mut self, path: impl Into<PathBuf>) -> Self {
        self.world = Some(path.into());
        self
    }

    /// Turn tone colouring on or off.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }

    /// Turn the exit list in room descriptions on or off.
    pub fn with_exits_listed(mut self, list_exits: bool) -> Self {
        self.list_exits = list_exits;
        self
    }

    /// Load the configured world.
    pub fn load_world(&self) -> FictionResult<World> {
        let world = match self.world.as_deref() {
            Some(path) => World::load(path)?,
            None => World::stock()?,
        };
        Ok(world)
    }

    /// The configured world file, if any.
    pub fn world_path(&self) -> Option<&Path> {
        self.world.as_deref()
    }
}
