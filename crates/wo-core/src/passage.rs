//! Passage rules: per-exit predicates deciding whether an actor may go through.
//!
//! Every exit carries a [`Gate`] and a [`PassageRule`]. The default rule only
//! reads the gate. Guarded rules are installed on both ends of a passage at
//! setup, and both ends hold the same gate, so unlocking a door from one side
//! leaves it open from the other.

use std::cell::Cell;
use std::rc::Rc;

/// The state a passage rule may inspect.
pub trait Actor {
    /// Whether the actor is holding an item with this label.
    fn holds(&self, label: &str) -> bool;

    /// Whether the actor has been treated against the hazard behind a
    /// prerequisite-guarded door.
    fn is_treated(&self) -> bool;
}

/// An open/closed flag that may be shared by both ends of a passage.
///
/// Cloning a gate yields another handle to the same flag.
#[derive(Debug, Clone, Default)]
pub struct Gate(Rc<Cell<bool>>);

impl Gate {
    /// Create a gate in the given state.
    pub fn new(open: bool) -> Self {
        Self(Rc::new(Cell::new(open)))
    }

    /// Whether the gate is open.
    pub fn is_open(&self) -> bool {
        self.0.get()
    }

    /// Open the gate for every handle sharing it.
    pub fn open(&self) {
        self.0.set(true);
    }

    /// Whether two handles refer to the same flag.
    pub fn is_shared_with(&self, other: &Gate) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

/// Outcome of evaluating a passage rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Passage {
    /// The actor may go through, optionally with something to say about it.
    Allowed(Option<String>),
    /// The actor is turned back.
    Denied(String),
}

impl Passage {
    /// Whether passage was granted.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Self::Allowed(_))
    }

    /// The narrative attached to the outcome, if any.
    pub fn narrative(&self) -> Option<&str> {
        match self {
            Self::Allowed(text) => text.as_deref(),
            Self::Denied(text) => Some(text),
        }
    }
}

/// The closed set of rules an exit can carry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PassageRule {
    /// Pass iff the gate is open.
    #[default]
    Default,
    /// Pass once the actor holds both credentials; the gate then stays open.
    DualCredential {
        /// Item that operates the lock.
        key: String,
        /// Item needed to survive what lies beyond.
        protection: String,
    },
    /// Pass iff the actor has been treated. Never mutates.
    Prerequisite,
}

const KEY_ONLY: &str = "The reader beeps as the light turns green, and the door swings open. \
Outside, a howling wind whips across waist-deep drifts of snow. It's hard to see anything \
through the blizzard. You don't think you'd survive long out there without some protection \
from the cold. You let the door swing shut.";
const PROTECTION_ONLY: &str = "You're dressed for the cold, but the door doesn't budge. \
There's a card reader mounted beside the frame.";
const NEITHER: &str = "You think you'll need a keycard to open that door.";
const UNLOCKED: &str = "You swipe the keycard and pull the parka tight. The door swings open \
onto the howling white.";
const UNTREATED: &str = "You really don't think it's a good idea to go in there unprotected.";
const TREATED: &str = "You step through the door. You're pretty sure that you wouldn't \
experience radiation exposure as a slight subdermal tingle, so that's probably your imagination.";

impl PassageRule {
    /// Evaluate the rule for an actor approaching the exit named `exit_name`.
    pub fn evaluate(&self, gate: &Gate, exit_name: &str, actor: &dyn Actor) -> Passage {
        match self {
            Self::Default => {
                if gate.is_open() {
                    Passage::Allowed(None)
                } else {
                    Passage::Denied(format!("The {exit_name} is closed."))
                }
            }
            Self::DualCredential { key, protection } => {
                if gate.is_open() {
                    return Passage::Allowed(None);
                }
                match (actor.holds(key), actor.holds(protection)) {
                    (true, true) => {
                        gate.open();
                        tracing::debug!(exit = exit_name, "dual-credential gate opened");
                        Passage::Allowed(Some(UNLOCKED.to_string()))
                    }
                    (true, false) => Passage::Denied(KEY_ONLY.to_string()),
                    (false, true) => Passage::Denied(PROTECTION_ONLY.to_string()),
                    (false, false) => Passage::Denied(NEITHER.to_string()),
                }
            }
            Self::Prerequisite => {
                if actor.is_treated() {
                    Passage::Allowed(Some(TREATED.to_string()))
                } else {
                    Passage::Denied(UNTREATED.to_string())
                }
            }
        }
    }
}
