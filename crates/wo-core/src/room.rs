use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::exit::Exit;
use crate::item::{Accessibility, Item};

/// One row of room definitions in a world file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomConfig {
    /// Stable identity key.
    pub label: String,
    /// User-facing name.
    pub name: String,
    /// Text shown on entering or looking around.
    #[serde(default)]
    pub description: String,
}

/// A place the player can stand in. Owns the items lying in it and the
/// exits leaving it.
#[derive(Debug)]
pub struct Room {
    /// Stable identity key.
    pub label: String,
    /// User-facing name.
    pub name: String,
    /// Text shown on entering or looking around.
    pub description: String,
    /// Items present, keyed by label.
    pub items: BTreeMap<String, Item>,
    /// Exits leaving this room, keyed by label.
    pub exits: BTreeMap<String, Exit>,
}

impl Room {
    /// Create an empty room.
    pub fn new(label: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            name: name.into(),
            description: String::new(),
            items: BTreeMap::new(),
            exits: BTreeMap::new(),
        }
    }

    /// Build an empty room from its world-file row.
    pub fn from_config(config: &RoomConfig) -> Self {
        let mut room = Self::new(config.label.clone(), config.name.clone());
        room.description = config.description.clone();
        room
    }

    /// Get an item by label.
    pub fn item(&self, label: &str) -> Option<&Item> {
        self.items.get(label)
    }

    /// Whether an item with this label lies here.
    pub fn has_item(&self, label: &str) -> bool {
        self.items.contains_key(label)
    }

    /// Remove and return an item.
    pub fn take_item(&mut self, label: &str) -> Option<Item> {
        self.items.remove(label)
    }

    /// Put an item down here.
    pub fn put_item(&mut self, item: Item) {
        self.items.insert(item.label.clone(), item);
    }

    /// Rewrite an item's accessibility class. Returns the previous class, or
    /// `None` when the item is not here.
    pub fn set_accessibility(&mut self, label: &str, kind: Accessibility) -> Option<Accessibility> {
        let item = self.items.get_mut(label)?;
        let previous = item.kind;
        item.kind = kind;
        tracing::debug!(
            room = %self.label,
            item = label,
            from = %previous,
            to = %kind,
            "accessibility changed"
        );
        Some(previous)
    }

    /// Get an exit by label.
    pub fn exit(&self, label: &str) -> Option<&Exit> {
        self.exits.get(label)
    }

    /// Items that are not hidden.
    pub fn visible_items(&self) -> impl Iterator<Item = &Item> {
        self.items.values().filter(|item| item.kind.is_visible())
    }

    /// Items that can be picked up.
    pub fn carryable_items(&self) -> impl Iterator<Item = &Item> {
        self.items
            .values()
            .filter(|item| item.kind == Accessibility::Carryable)
    }
}
