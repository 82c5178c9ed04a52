use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{WoError, WoResult};
use crate::item::{Item, ItemConfig};
use crate::registry::ExitRegistry;
use crate::room::{Room, RoomConfig};

/// The world file bundled with the game.
const STOCK_WORLD: &str = include_str!("../data/whiteout.json");

/// Metadata about the world itself.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldMeta {
    /// Title of the adventure.
    pub name: String,
    /// Text shown when a session starts.
    #[serde(default)]
    pub intro: String,
    /// Label of the room the player starts in.
    pub start: String,
}

/// The on-disk shape of a world: flat tables of rooms, items, and exits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldData {
    /// World metadata.
    pub meta: WorldMeta,
    /// Room definitions.
    pub rooms: Vec<RoomConfig>,
    /// Item definitions.
    #[serde(default)]
    pub items: Vec<ItemConfig>,
    /// One-way exit definitions; reverses are derived.
    #[serde(default)]
    pub exits: Vec<crate::exit::ExitConfig>,
}

/// The assembled world: every room with its items and exits in place.
#[derive(Debug)]
pub struct World {
    /// World metadata.
    pub meta: WorldMeta,
    rooms: BTreeMap<String, Room>,
}

impl World {
    /// Assemble a world from its tables, validating every cross-reference.
    pub fn from_data(data: WorldData) -> WoResult<Self> {
        let mut rooms = BTreeMap::new();
        for config in &data.rooms {
            if rooms.contains_key(&config.label) {
                return Err(WoError::DuplicateLabel(config.label.clone()));
            }
            rooms.insert(config.label.clone(), Room::from_config(config));
        }

        if !rooms.contains_key(&data.meta.start) {
            return Err(WoError::RoomNotFound(data.meta.start.clone()));
        }

        let mut item_labels = Vec::with_capacity(data.items.len());
        for config in &data.items {
            if item_labels.contains(&config.label.as_str()) {
                return Err(WoError::DuplicateLabel(config.label.clone()));
            }
            item_labels.push(config.label.as_str());

            let room = rooms
                .get_mut(&config.location)
                .ok_or_else(|| WoError::RoomNotFound(config.location.clone()))?;
            room.put_item(Item::from_config(config));
        }

        let registry = ExitRegistry::populate(&data.exits)?;
        for exit in registry.into_exits() {
            if !rooms.contains_key(&exit.destination) {
                return Err(WoError::RoomNotFound(exit.destination.clone()));
            }
            let room = rooms
                .get_mut(&exit.location)
                .ok_or_else(|| WoError::RoomNotFound(exit.location.clone()))?;
            room.exits.insert(exit.label.clone(), exit);
        }

        let world = Self {
            meta: data.meta,
            rooms,
        };
        tracing::info!(
            name = %world.meta.name,
            rooms = world.room_count(),
            items = world.item_count(),
            exits = world.exit_count(),
            "world loaded"
        );
        Ok(world)
    }

    /// Parse and assemble a world from JSON text.
    pub fn from_json(json: &str) -> WoResult<Self> {
        let data: WorldData = serde_json::from_str(json)?;
        Self::from_data(data)
    }

    /// Read and assemble a world file.
    pub fn load(path: &Path) -> WoResult<Self> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// The bundled arctic-station adventure.
    pub fn stock() -> WoResult<Self> {
        Self::from_json(STOCK_WORLD)
    }

    /// Get a room by label.
    pub fn room(&self, label: &str) -> Option<&Room> {
        self.rooms.get(label)
    }

    /// Get a mutable room by label.
    pub fn room_mut(&mut self, label: &str) -> Option<&mut Room> {
        self.rooms.get_mut(label)
    }

    /// The starting room.
    pub fn start(&self) -> WoResult<&Room> {
        self.room(&self.meta.start)
            .ok_or_else(|| WoError::RoomNotFound(self.meta.start.clone()))
    }

    /// Iterate rooms in label order.
    pub fn rooms(&self) -> impl Iterator<Item = &Room> {
        self.rooms.values()
    }

    /// Number of rooms.
    pub fn room_count(&self) -> usize {
        self.rooms.len()
    }

    /// Number of items lying in rooms.
    pub fn item_count(&self) -> usize {
        self.rooms.values().map(|r| r.items.len()).sum()
    }

    /// Number of exits, counting both directions.
    pub fn exit_count(&self) -> usize {
        self.rooms.values().map(|r| r.exits.len()).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::Accessibility;
    use crate::passage::PassageRule;
    use crate::registry::{MAIN_PORTAL, REACTOR_DOOR};

    fn minimal_json(extra_item: &str) -> String {
        format!(
            r#"{{
                "meta": {{ "name": "Test", "start": "lobby" }},
                "rooms": [
                    {{ "label": "lobby", "name": "Lobby" }},
                    {{ "label": "yard", "name": "Yard" }},
                    {{ "label": "basement", "name": "Basement" }},
                    {{ "label": "reactor", "name": "Reactor" }}
                ],
                "items": [
                    {{ "label": "parka", "name": "parka", "location": "lobby", "type": "carryable" }}
                    {extra_item}
                ],
                "exits": [
                    {{ "label": "main_portal", "name": "main door", "location": "lobby",
                       "destination": "yard", "direction": "north", "is_open": "no" }},
                    {{ "label": "reactor_door", "name": "lead door", "location": "basement",
                       "destination": "reactor", "direction": "east", "is_open": "no" }},
                    {{ "label": "stairs", "name": "stairs", "location": "lobby",
                       "destination": "basement", "direction": "down", "is_open": "yes" }}
                ]
            }}"#
        )
    }

    #[test]
    fn assembles_rooms_items_and_exits() {
        let world = World::from_json(&minimal_json("")).unwrap();
        assert_eq!(world.room_count(), 4);
        assert_eq!(world.item_count(), 1);
        assert_eq!(world.exit_count(), 6);
        assert_eq!(world.start().unwrap().label, "lobby");

        let lobby = world.room("lobby").unwrap();
        assert!(lobby.exit(MAIN_PORTAL).is_some());
        assert!(lobby.exit("stairs").is_some());
        assert_eq!(
            lobby.item("parka").map(|i| i.kind),
            Some(Accessibility::Carryable)
        );

        let yard = world.room("yard").unwrap();
        let back = yard.exit("main_portal_rev").unwrap();
        assert_eq!(back.destination, "lobby");
        assert!(back.gate().is_shared_with(lobby.exit(MAIN_PORTAL).unwrap().gate()));

        let reactor = world.room("reactor").unwrap();
        assert_eq!(
            reactor.exit("reactor_door_rev").unwrap().rule(),
            &PassageRule::Prerequisite
        );
        assert!(world.room("basement").unwrap().exit(REACTOR_DOOR).is_some());
    }

    #[test]
    fn item_in_unknown_room_rejected() {
        let json = minimal_json(
            r#", { "label": "rod", "name": "rod", "location": "nowhere", "type": "hidden" }"#,
        );
        assert!(matches!(
            World::from_json(&json),
            Err(WoError::RoomNotFound(room)) if room == "nowhere"
        ));
    }

    #[test]
    fn duplicate_item_rejected() {
        let json = minimal_json(
            r#", { "label": "parka", "name": "parka", "location": "yard", "type": "carryable" }"#,
        );
        assert!(matches!(
            World::from_json(&json),
            Err(WoError::DuplicateLabel(label)) if label == "parka"
        ));
    }

    #[test]
    fn malformed_json_is_parse_error() {
        assert!(matches!(World::from_json("{"), Err(WoError::Parse(_))));
    }

    #[test]
    fn load_reads_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("world.json");
        std::fs::write(&path, minimal_json("")).unwrap();

        let world = World::load(&path).unwrap();
        assert_eq!(world.meta.name, "Test");

        let missing = dir.path().join("missing.json");
        assert!(matches!(World::load(&missing), Err(WoError::Io(_))));
    }

    #[test]
    fn stock_world_loads() {
        let world = World::stock().unwrap();
        assert_eq!(world.meta.start, "lobby");
        for room in world.rooms() {
            for exit in room.exits.values() {
                assert!(world.room(&exit.destination).is_some());
            }
        }
        let garage = world.room("garage").unwrap();
        assert_eq!(garage.item("key").unwrap().kind, Accessibility::Hidden);
        assert!(garage.item("frozen_corpse").unwrap().look_special);
    }

    #[test]
    fn separate_loads_keep_separate_doors() {
        let first = World::stock().unwrap();
        let second = World::stock().unwrap();
        let door = |world: &World| {
            world
                .room("lobby")
                .and_then(|room| room.exit(MAIN_PORTAL))
                .unwrap()
                .gate()
                .clone()
        };

        door(&first).open();
        assert!(door(&first).is_open());
        assert!(!door(&second).is_open());
        assert!(!door(&first).is_shared_with(&door(&second)));
    }
}
