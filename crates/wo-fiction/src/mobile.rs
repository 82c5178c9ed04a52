//! The player character's state.

use std::collections::BTreeSet;

use wo_core::{Actor, Inventory, Room};

/// Something that moves around the world. There is one per session: the player.
#[derive(Debug, Clone)]
pub struct Mobile {
    /// Items being carried.
    pub inventory: Inventory,
    /// Label of the room the mobile stands in.
    pub location: String,
    /// Label of the room the mobile will be in when the turn commits. Equal to
    /// `location` unless a move just succeeded.
    pub new_location: String,
    /// Whether the anti-radiation serum has been injected.
    pub treated: bool,
    /// Whether the game has been won.
    pub victory: bool,
}

impl Mobile {
    /// Create a mobile standing in the given room.
    pub fn new(location: impl Into<String>) -> Self {
        let location = location.into();
        Self {
            inventory: Inventory::new(),
            new_location: location.clone(),
            location,
            treated: false,
            victory: false,
        }
    }

    /// Whether a move is waiting to be committed.
    pub fn is_moving(&self) -> bool {
        self.new_location != self.location
    }

    /// End the turn: enter the pending destination, if any. Returns whether
    /// the mobile changed rooms.
    pub fn commit(&mut self) -> bool {
        if !self.is_moving() {
            return false;
        }
        tracing::debug!(from = %self.location, to = %self.new_location, "mobile moved");
        self.location = self.new_location.clone();
        true
    }

    /// Labels of everything the mobile can refer to: visible room items,
    /// exits, and carried items.
    pub fn can_see<'a>(&'a self, room: &'a Room) -> BTreeSet<&'a str> {
        room.visible_items()
            .map(|item| item.label.as_str())
            .chain(room.exits.keys().map(String::as_str))
            .chain(self.inventory.iter().map(|item| item.label.as_str()))
            .collect()
    }
}

impl Actor for Mobile {
    fn holds(&self, label: &str) -> bool {
        self.inventory.has(label)
    }

    fn is_treated(&self) -> bool {
        self.treated
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wo_core::{Accessibility, Item};

    #[test]
    fn new_mobile_is_still() {
        let mobile = Mobile::new("lobby");
        assert_eq!(mobile.location, "lobby");
        assert!(!mobile.is_moving());
        assert!(!mobile.treated);
        assert!(!mobile.victory);
        assert!(mobile.inventory.is_empty());
    }

    #[test]
    fn commit_enters_pending_room_once() {
        let mut mobile = Mobile::new("lobby");
        assert!(!mobile.commit());

        mobile.new_location = "kitchen".to_string();
        assert!(mobile.is_moving());
        assert!(mobile.commit());
        assert_eq!(mobile.location, "kitchen");
        assert!(!mobile.commit());
    }

    #[test]
    fn actor_reads_inventory_and_treatment() {
        let mut mobile = Mobile::new("lobby");
        assert!(!mobile.holds("parka"));
        mobile
            .inventory
            .add(Item::new("parka", "parka", Accessibility::Carryable));
        assert!(mobile.holds("parka"));

        mobile.treated = true;
        assert!(mobile.is_treated());
    }

    #[test]
    fn can_see_skips_hidden_items() {
        let mut room = Room::new("infirmary", "Infirmary");
        room.put_item(Item::new("corpse", "corpse", Accessibility::Scenery));
        room.put_item(Item::new("keycard", "keycard", Accessibility::Hidden));

        let mut mobile = Mobile::new("infirmary");
        mobile
            .inventory
            .add(Item::new("scalpel", "scalpel", Accessibility::Carryable));

        let seen = mobile.can_see(&room);
        assert!(seen.contains("corpse"));
        assert!(seen.contains("scalpel"));
        assert!(!seen.contains("keycard"));
    }
}
