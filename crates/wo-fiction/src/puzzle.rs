//! The puzzle dependency tables.
//!
//! Examining some items reveals another item in the same room, and using
//! items dispatches to one of four puzzle actions. Both mappings are closed:
//! a label routed to [`reveal_for`] that is not listed is a world defect.

use wo_core::Accessibility;

/// Room where the frozen key is cut free and the snowmobile is fixed.
pub const GARAGE: &str = "garage";
/// Room holding the reactor core.
pub const REACTOR: &str = "reactor";

/// Item that cuts.
pub const SCALPEL: &str = "scalpel";
/// Item that treats the player.
pub const SYRINGE: &str = "syringe";
/// Item that unlocks the core.
pub const KEY: &str = "key";
/// Locked reactor core, removed once unlocked.
pub const CORE: &str = "core";
/// Scenery that replaces the core once unlocked.
pub const OPEN_CORE: &str = "open_core";
/// Power source for the snowmobile.
pub const ROD: &str = "rod";
/// The way out.
pub const SNOWMOBILE: &str = "snowmobile";

/// An examine side effect: looking at `source` turns `target` into `becomes`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    /// Item being examined.
    pub source: &'static str,
    /// Item in the same room that changes.
    pub target: &'static str,
    /// Accessibility class the target takes.
    pub becomes: Accessibility,
}

/// Every examine side effect.
pub const REVEALS: &[Reveal] = &[
    Reveal {
        source: "corpse",
        target: "keycard",
        becomes: Accessibility::Carryable,
    },
    Reveal {
        source: "frozen_corpse",
        target: KEY,
        becomes: Accessibility::Scenery,
    },
    Reveal {
        source: "fridge",
        target: SYRINGE,
        becomes: Accessibility::Carryable,
    },
];

/// Look up the side effect of examining `label`.
pub fn reveal_for(label: &str) -> Option<&'static Reveal> {
    REVEALS.iter().find(|r| r.source == label)
}

/// What using an item does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleAction {
    /// Cut the frozen key free.
    Cut,
    /// Inject the serum.
    Inject,
    /// Unlock the reactor core.
    Unlock,
    /// Power up the snowmobile.
    Fix,
}

/// One use-verb mapping. `room` narrows an ambiguous item to one location.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UseRule {
    /// Item being used.
    pub item: &'static str,
    /// Room the rule applies in; `None` for anywhere.
    pub room: Option<&'static str>,
    /// Action performed.
    pub action: PuzzleAction,
}

/// Every use-verb mapping, first match wins.
pub const USE_RULES: &[UseRule] = &[
    UseRule {
        item: SCALPEL,
        room: None,
        action: PuzzleAction::Cut,
    },
    UseRule {
        item: KEY,
        room: Some(GARAGE),
        action: PuzzleAction::Cut,
    },
    UseRule {
        item: SYRINGE,
        room: None,
        action: PuzzleAction::Inject,
    },
    UseRule {
        item: CORE,
        room: None,
        action: PuzzleAction::Unlock,
    },
    UseRule {
        item: OPEN_CORE,
        room: None,
        action: PuzzleAction::Unlock,
    },
    UseRule {
        item: KEY,
        room: Some(REACTOR),
        action: PuzzleAction::Unlock,
    },
    UseRule {
        item: SNOWMOBILE,
        room: None,
        action: PuzzleAction::Fix,
    },
    UseRule {
        item: ROD,
        room: Some(GARAGE),
        action: PuzzleAction::Fix,
    },
];

/// Look up the action for using `item` while standing in `room`.
pub fn action_for(item: &str, room: &str) -> Option<PuzzleAction> {
    USE_RULES
        .iter()
        .find(|rule| rule.item == item && rule.room.is_none_or(|r| r == room))
        .map(|rule| rule.action)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wo_core::World;

    #[test]
    fn key_depends_on_room() {
        assert_eq!(action_for(KEY, GARAGE), Some(PuzzleAction::Cut));
        assert_eq!(action_for(KEY, REACTOR), Some(PuzzleAction::Unlock));
        assert_eq!(action_for(KEY, "lobby"), None);
    }

    #[test]
    fn unrestricted_items_work_anywhere() {
        assert_eq!(action_for(SCALPEL, "lobby"), Some(PuzzleAction::Cut));
        assert_eq!(action_for(SYRINGE, REACTOR), Some(PuzzleAction::Inject));
        assert_eq!(action_for(CORE, "kitchen"), Some(PuzzleAction::Unlock));
        assert_eq!(action_for(OPEN_CORE, REACTOR), Some(PuzzleAction::Unlock));
        assert_eq!(action_for(SNOWMOBILE, "yard"), Some(PuzzleAction::Fix));
        assert_eq!(action_for(ROD, "yard"), None);
        assert_eq!(action_for("parka", GARAGE), None);
    }

    #[test]
    fn reveals_never_target_their_source() {
        for reveal in REVEALS {
            assert_ne!(reveal.source, reveal.target);
            assert_ne!(reveal.becomes, Accessibility::Hidden);
        }
        assert!(reveal_for("parka").is_none());
    }

    #[test]
    fn stock_world_matches_reveal_table() {
        let world = World::stock().unwrap();
        for room in world.rooms() {
            for item in room.items.values().filter(|i| i.look_special) {
                let reveal = reveal_for(&item.label)
                    .unwrap_or_else(|| panic!("{} has no reveal", item.label));
                let target = room
                    .item(reveal.target)
                    .unwrap_or_else(|| panic!("{} is not beside {}", reveal.target, item.label));
                assert_eq!(target.kind, Accessibility::Hidden);
            }
        }
        for reveal in REVEALS {
            assert!(
                world
                    .rooms()
                    .any(|room| room.item(reveal.source).is_some_and(|i| i.look_special))
            );
        }
    }
}
