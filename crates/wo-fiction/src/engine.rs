//! Verb resolution: turns a verb and an already-resolved target into world
//! mutations and narration.
//!
//! Targets arrive as labels, with `None` standing for "not found". No verb
//! fails with an error. An unmet precondition leaves the world untouched and
//! says why; a successful action applies all of its mutations.

use wo_core::{Accessibility, Passage, Room};

use crate::mobile::Mobile;
use crate::narration::Narration;
use crate::puzzle::{
    CORE, GARAGE, KEY, OPEN_CORE, PuzzleAction, REACTOR, ROD, SCALPEL, SYRINGE, action_for,
    reveal_for,
};

impl Mobile {
    /// Try to go through an exit of `room`.
    pub fn move_through(&mut self, room: &Room, exit: Option<&str>) -> Narration {
        let Some(exit) = exit.and_then(|label| room.exit(label)) else {
            return Narration::failure("You can't go that way.");
        };

        match exit.shall_pass(&*self) {
            Passage::Allowed(narrative) => {
                self.new_location = exit.destination.clone();
                let travel = format!("You go through the {} to the {}.", exit.name, exit.direction);
                match narrative {
                    Some(text) => Narration::travel(format!("{text}\n{travel}")),
                    None => Narration::travel(travel),
                }
            }
            Passage::Denied(text) => Narration::failure(text),
        }
    }

    /// Pick up an item lying in `room`.
    pub fn take(&mut self, room: &mut Room, item: Option<&str>) -> Narration {
        let Some(label) = item.filter(|label| room.has_item(label)) else {
            return Narration::caution("I don't see one of those to pick up.");
        };
        if room.item(label).map(|i| i.kind) != Some(Accessibility::Carryable) {
            return Narration::failure("You can't pick that up.");
        }

        match room.take_item(label) {
            Some(item) => {
                let text = format!("You pick up the {}.", item.name);
                tracing::debug!(item = label, room = %room.label, "taken");
                self.inventory.add(item);
                Narration::success(text)
            }
            None => Narration::caution("I don't see one of those to pick up."),
        }
    }

    /// Put a carried item down in `room`.
    pub fn drop(&mut self, room: &mut Room, item: Option<&str>) -> Narration {
        match item.and_then(|label| self.inventory.remove(label)) {
            Some(item) => {
                let text = format!("You drop the {}.", item.name);
                tracing::debug!(item = %item.label, room = %room.label, "dropped");
                room.put_item(item);
                Narration::success(text)
            }
            None => Narration::caution("You're not carrying one of those."),
        }
    }

    /// Run the side effect of examining an item flagged `look_special`.
    ///
    /// Reveals only fire on a target that is still hidden, so examining twice
    /// never re-applies a transition.
    pub fn look_special(&mut self, room: &mut Room, item: &str) -> Narration {
        let Some(reveal) = reveal_for(item) else {
            return Narration::diagnostic(format!("look special failed for \"{item}\""));
        };

        match room.item(reveal.target) {
            Some(target) if target.kind == Accessibility::Hidden => {
                let text = format!("Looking closer, you notice the {}.", target.name);
                room.set_accessibility(reveal.target, reveal.becomes);
                Narration::event(text)
            }
            _ => Narration::info("You don't find anything else of interest."),
        }
    }

    /// Use an item, dispatching on its label and the current room.
    pub fn use_item(&mut self, room: &mut Room, item: Option<&str>) -> Narration {
        let Some(label) = item else {
            return Narration::caution("You don't see one of those.");
        };

        match action_for(label, &room.label) {
            Some(PuzzleAction::Cut) => self.cut(room),
            Some(PuzzleAction::Inject) => self.inject(),
            Some(PuzzleAction::Unlock) => self.unlock_core(room),
            Some(PuzzleAction::Fix) => self.fix(room),
            None => Narration::failure("You don't see how to do that."),
        }
    }

    fn cut(&mut self, room: &mut Room) -> Narration {
        if !self.inventory.has(SCALPEL) {
            return Narration::failure("You don't have anything to cut that with.");
        }
        if !can_cut_key(room) {
            return Narration::caution("Cutting that doesn't seem like it would be a good idea.");
        }

        room.set_accessibility(KEY, Accessibility::Carryable);
        Narration::success(
            "You use the scalpel to cut the key free of the frozen, swollen fingers. \
             The flesh is stiff and bloodless.",
        )
    }

    fn inject(&mut self) -> Narration {
        if !self.inventory.has(SYRINGE) {
            return Narration::failure("You don't have anything to inject.");
        }

        self.treated = true;
        tracing::debug!("mobile treated");
        Narration::event(
            "It's clear what you have to do. You grit your teeth and plunge the syringe into \
             your chest. You probably can't really feel the spread of the liquid burning \
             through your arteries, but it feels like you can.",
        )
    }

    fn unlock_core(&mut self, room: &mut Room) -> Narration {
        if !self.inventory.has(KEY) {
            return Narration::failure("You don't have anything that fits in the lock.");
        }
        if room.label != REACTOR || !room.has_item(CORE) {
            return Narration::failure("You don't see anything that key would unlock.");
        }
        if let Some(missing) = [OPEN_CORE, ROD].into_iter().find(|l| !room.has_item(l)) {
            return Narration::diagnostic(format!("reactor room is missing \"{missing}\""));
        }

        room.take_item(CORE);
        room.set_accessibility(OPEN_CORE, Accessibility::Scenery);
        room.set_accessibility(ROD, Accessibility::Carryable);
        tracing::debug!("core unlocked");
        Narration::success(
            "You put the key into the lock on top of the cylinder and twist. \
             There's a hiss as the top angles open.",
        )
    }

    fn fix(&mut self, room: &Room) -> Narration {
        if room.label != GARAGE {
            return Narration::caution("You don't think that really needs that kind of power.");
        }
        if !self.inventory.has(ROD) {
            return Narration::event(
                "The snowmobile is totally inert. The gas tank and battery have both been \
                 removed, and a strange cylindrical assembly is mounted on the side. It will \
                 need some other power source.",
            );
        }

        self.victory = true;
        tracing::debug!("victory");
        Narration::event(
            "You slide the rod into the cylinder on the side of the modified snowmobile. \
             It slides into place snugly and the snowmobile's electronics blink to life.",
        )
    }
}

/// The key can be cut only in the garage, only while it is still there and
/// has been noticed.
fn can_cut_key(room: &Room) -> bool {
    room.label == GARAGE && room.item(KEY).is_some_and(|key| key.kind.is_visible())
}
