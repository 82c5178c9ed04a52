use std::fmt;

use serde::{Deserialize, Serialize};

/// How the player may interact with an item. Puzzle steps rewrite this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Accessibility {
    /// Invisible to listings and keyword matching until revealed.
    Hidden,
    /// Can be picked up and carried.
    Carryable,
    /// Visible fixture that cannot be taken.
    Scenery,
    /// Visible fixture that blocks or is the subject of a puzzle.
    Obstacle,
}

impl Accessibility {
    /// Whether the item can be seen and referred to.
    pub fn is_visible(self) -> bool {
        self != Self::Hidden
    }
}

impl fmt::Display for Accessibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hidden => write!(f, "hidden"),
            Self::Carryable => write!(f, "carryable"),
            Self::Scenery => write!(f, "scenery"),
            Self::Obstacle => write!(f, "obstacle"),
        }
    }
}

/// One row of item definitions in a world file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemConfig {
    /// Stable identity key.
    pub label: String,
    /// User-facing name.
    pub name: String,
    /// Full description shown on examination.
    #[serde(default)]
    pub description: String,
    /// Label of the room the item starts in.
    pub location: String,
    /// Whitespace-separated words the player may use for the item.
    #[serde(default)]
    pub keywords: String,
    /// Initial accessibility class.
    #[serde(rename = "type")]
    pub kind: Accessibility,
    /// Whether examining the item triggers a puzzle event.
    #[serde(default)]
    pub look_special: bool,
}

/// A world object.
#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    /// Stable identity key.
    pub label: String,
    /// User-facing name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Current accessibility class.
    pub kind: Accessibility,
    /// Lowercased keyword aliases.
    pub keywords: Vec<String>,
    /// Whether examining the item triggers a puzzle event.
    pub look_special: bool,
}

impl Item {
    /// Create an item with no keywords beyond its own label.
    pub fn new(label: impl Into<String>, name: impl Into<String>, kind: Accessibility) -> Self {
        let label = label.into();
        Self {
            keywords: vec![label.to_lowercase()],
            label,
            name: name.into(),
            description: String::new(),
            kind,
            look_special: false,
        }
    }

    /// Build an item from its world-file row.
    pub fn from_config(config: &ItemConfig) -> Self {
        Self {
            label: config.label.clone(),
            name: config.name.clone(),
            description: config.description.clone(),
            kind: config.kind,
            keywords: split_words(&config.keywords),
            look_special: config.look_special,
        }
    }

    /// Add keyword aliases.
    pub fn with_keywords(mut self, keywords: &[&str]) -> Self {
        self.keywords.extend(keywords.iter().map(|k| k.to_lowercase()));
        self
    }

    /// Whether the item answers to the given word.
    pub fn matches(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.label.eq_ignore_ascii_case(&word)
            || self.name.eq_ignore_ascii_case(&word)
            || self.keywords.iter().any(|k| *k == word)
    }
}

/// Split a whitespace-separated keyword cell into lowercased words.
pub(crate) fn split_words(cell: &str) -> Vec<String> {
    cell.split_whitespace().map(str::to_lowercase).collect()
}
