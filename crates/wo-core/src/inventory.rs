use std::collections::BTreeMap;

use crate::item::Item;

/// Items carried by a mobile, keyed by label.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Inventory {
    items: BTreeMap<String, Item>,
}

impl Inventory {
    /// Create an empty inventory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether an item with this label is held.
    pub fn has(&self, label: &str) -> bool {
        self.items.contains_key(label)
    }

    /// Add an item. An item with the same label is replaced, never duplicated.
    pub fn add(&mut self, item: Item) {
        self.items.insert(item.label.clone(), item);
    }

    /// Remove and return the item with this label.
    pub fn remove(&mut self, label: &str) -> Option<Item> {
        self.items.remove(label)
    }

    /// Get a held item by label.
    pub fn get(&self, label: &str) -> Option<&Item> {
        self.items.get(label)
    }

    /// Iterate held items in label order.
    pub fn iter(&self) -> impl Iterator<Item = &Item> {
        self.items.values()
    }

    /// Number of held items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is held.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
