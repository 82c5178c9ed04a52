pub mod check;
pub mod play;
pub mod rooms;

use std::path::PathBuf;

use wo_core::World;
use wo_fiction::GameConfig;

/// Build a session config from the shared `--world` flag.
fn config_for(world: Option<PathBuf>) -> GameConfig {
    match world {
        Some(path) => GameConfig::default().with_world(path),
        None => GameConfig::default(),
    }
}

/// Load the world a command operates on.
fn load_world(world: Option<PathBuf>) -> Result<World, String> {
    config_for(world).load_world().map_err(|e| e.to_string())
}
