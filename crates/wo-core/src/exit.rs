use serde::{Deserialize, Serialize};

use crate::direction::{Direction, reverse_token};
use crate::error::{WoError, WoResult};
use crate::item::split_words;
use crate::passage::{Actor, Gate, Passage, PassageRule};

/// Label suffix marking the far side of a passage.
pub const REVERSE_SUFFIX: &str = "_rev";

/// One row of exit definitions in a world file.
///
/// Each row describes one direction of travel; the registry derives the
/// opposite direction with [`ExitConfig::reversed`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExitConfig {
    /// Unique label.
    pub label: String,
    /// User-facing name.
    pub name: String,
    /// Full description.
    #[serde(default)]
    pub description: String,
    /// Label of the room the exit leaves from.
    pub location: String,
    /// Label of the room the exit leads to.
    pub destination: String,
    /// Direction token (full name or abbreviation).
    pub direction: String,
    /// `yes` or `no`.
    pub is_open: String,
    /// Whitespace-separated words the player may use for the exit.
    #[serde(default)]
    pub keywords: String,
    /// Whitespace-separated verbs associated with the exit.
    #[serde(default)]
    pub use_words: String,
}

impl ExitConfig {
    /// The definition of the same passage walked the other way.
    ///
    /// Origin and destination swap, the direction and every direction-token
    /// keyword reverse, and the label gains [`REVERSE_SUFFIX`]. Tokens are
    /// lowercased first, so `North` reverses like `north`.
    pub fn reversed(&self) -> Self {
        let keywords: Vec<String> = split_words(&self.keywords)
            .into_iter()
            .map(|k| reverse_token(&k))
            .collect();

        Self {
            label: format!("{}{REVERSE_SUFFIX}", self.label),
            name: self.name.clone(),
            description: self.description.clone(),
            location: self.destination.clone(),
            destination: self.location.clone(),
            direction: reverse_token(&self.direction.trim().to_lowercase()),
            is_open: self.is_open.clone(),
            keywords: keywords.join(" "),
            use_words: self.use_words.clone(),
        }
    }
}

/// Parse a serialized open/closed token.
pub fn parse_flag(token: &str) -> WoResult<bool> {
    match token.trim().to_lowercase().as_str() {
        "yes" => Ok(true),
        "no" => Ok(false),
        _ => Err(WoError::InvalidFlag(token.to_string())),
    }
}

/// One directed passage between two rooms.
///
/// Not `Clone`: a guarded exit shares its gate with its far side, and a copy
/// would stay tied to the original's open/closed state.
#[derive(Debug)]
pub struct Exit {
    /// Unique label.
    pub label: String,
    /// User-facing name.
    pub name: String,
    /// Full description.
    pub description: String,
    /// Label of the room the exit leaves from.
    pub location: String,
    /// Label of the room the exit leads to.
    pub destination: String,
    /// Direction of travel.
    pub direction: Direction,
    /// Lowercased words the player may use, including the direction and its
    /// abbreviation.
    pub keywords: Vec<String>,
    /// Lowercased verbs associated with the exit.
    pub use_words: Vec<String>,
    gate: Gate,
    rule: PassageRule,
}

impl Exit {
    /// Build an exit from its world-file row.
    pub fn from_config(config: &ExitConfig) -> WoResult<Self> {
        let direction =
            Direction::parse(&config.direction).ok_or_else(|| WoError::UnknownDirection {
                exit: config.label.clone(),
                token: config.direction.clone(),
            })?;

        let mut keywords = split_words(&config.keywords);
        for word in [direction.name(), direction.abbreviation()] {
            if !keywords.iter().any(|k| k == word) {
                keywords.push(word.to_string());
            }
        }

        Ok(Self {
            label: config.label.clone(),
            name: config.name.clone(),
            description: config.description.clone(),
            location: config.location.clone(),
            destination: config.destination.clone(),
            direction,
            keywords,
            use_words: split_words(&config.use_words),
            gate: Gate::new(parse_flag(&config.is_open)?),
            rule: PassageRule::Default,
        })
    }

    /// Whether the exit is currently open.
    pub fn is_open(&self) -> bool {
        self.gate.is_open()
    }

    /// The exit's open/closed flag.
    pub fn gate(&self) -> &Gate {
        &self.gate
    }

    /// The rule deciding passage.
    pub fn rule(&self) -> &PassageRule {
        &self.rule
    }

    /// Install a rule and the gate it operates on. Only called during setup.
    pub(crate) fn guard(&mut self, rule: PassageRule, gate: Gate) {
        self.rule = rule;
        self.gate = gate;
    }

    /// Decide whether `actor` may go through.
    pub fn shall_pass(&self, actor: &dyn Actor) -> Passage {
        self.rule.evaluate(&self.gate, &self.name, actor)
    }

    /// Whether the exit answers to the given word.
    pub fn matches(&self, word: &str) -> bool {
        let word = word.to_lowercase();
        self.label.eq_ignore_ascii_case(&word)
            || self.name.eq_ignore_ascii_case(&word)
            || self.keywords.iter().any(|k| *k == word)
    }
}
