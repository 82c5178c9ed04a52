//! Keyword resolution of player words to items and exits.
//!
//! Exact keyword matches win; otherwise a Jaro-Winkler fallback tolerates
//! typos. Hidden items are never candidates. `None` is the "not found"
//! sentinel the interaction engine expects.

use strsim::jaro_winkler;
use wo_core::{Exit, Inventory, Item, Room};

/// Minimum similarity score for fuzzy matching (0.0-1.0).
const FUZZY_THRESHOLD: f64 = 0.9;

/// Words that never name anything.
const FILLER: &[&str] = &["the", "a", "an", "at", "to", "on", "with", "up", "my"];

/// Something the player can refer to by keyword.
trait Keyworded {
    fn words(&self) -> Vec<&str>;
}

impl Keyworded for Item {
    fn words(&self) -> Vec<&str> {
        [self.label.as_str(), self.name.as_str()]
            .into_iter()
            .chain(self.keywords.iter().map(String::as_str))
            .collect()
    }
}

impl Keyworded for Exit {
    fn words(&self) -> Vec<&str> {
        [self.label.as_str(), self.name.as_str()]
            .into_iter()
            .chain(self.keywords.iter().map(String::as_str))
            .collect()
    }
}

/// Find the exit of `room` the input names.
pub fn resolve_exit<'a>(room: &'a Room, input: &str) -> Option<&'a Exit> {
    best_match(room.exits.values().collect(), input)
}

/// Find a visible item lying in `room`.
pub fn resolve_room_item<'a>(room: &'a Room, input: &str) -> Option<&'a Item> {
    best_match(room.visible_items().collect(), input)
}

/// Find a carried item.
pub fn resolve_held_item<'a>(inventory: &'a Inventory, input: &str) -> Option<&'a Item> {
    best_match(inventory.iter().collect(), input)
}

/// Find an item in the room or the inventory. An exact match anywhere beats
/// a fuzzy one; between equals, the room wins.
pub fn resolve_any_item<'a>(
    room: &'a Room,
    inventory: &'a Inventory,
    input: &str,
) -> Option<&'a Item> {
    best_match(room.visible_items().chain(inventory.iter()).collect(), input)
}

/// The whole phrase first, then each meaningful word.
fn phrases(input: &str) -> Vec<String> {
    let input = input.trim().to_lowercase();
    let mut phrases = vec![input.clone()];
    for word in input.split_whitespace() {
        if !FILLER.contains(&word) && !phrases.iter().any(|p| p == word) {
            phrases.push(word.to_string());
        }
    }
    phrases
}

fn best_match<'a, T: Keyworded>(candidates: Vec<&'a T>, input: &str) -> Option<&'a T> {
    let phrases = phrases(input);

    for phrase in &phrases {
        let exact = candidates
            .iter()
            .find(|c| c.words().iter().any(|w| w.eq_ignore_ascii_case(phrase)));
        if let Some(found) = exact {
            return Some(*found);
        }
    }

    let mut best: Option<(&'a T, f64)> = None;
    for candidate in &candidates {
        for word in candidate.words() {
            let word = word.to_lowercase();
            for phrase in &phrases {
                let score = jaro_winkler(phrase, &word);
                if score >= FUZZY_THRESHOLD && best.is_none_or(|(_, b)| score > b) {
                    best = Some((*candidate, score));
                }
            }
        }
    }
    best.map(|(found, _)| found)
}
