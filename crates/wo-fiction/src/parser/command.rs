//! Command parsing for player input.

use wo_core::Direction;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Go through an exit named by direction or keyword.
    Move {
        /// Words naming the exit.
        target: String,
    },
    /// Look around, or examine a specific target.
    Look {
        /// Optional target to examine.
        target: Option<String>,
    },
    /// Take an item.
    Take {
        /// The item words.
        item: String,
    },
    /// Drop an item.
    Drop {
        /// The item words.
        item: String,
    },
    /// Use an item.
    Use {
        /// The item words.
        item: String,
    },
    /// List inventory.
    Inventory,
    /// Show help.
    Help {
        /// Optional help topic.
        topic: Option<String>,
    },
    /// Quit the game.
    Quit,
    /// Unknown command.
    Unknown {
        /// The original input.
        input: String,
    },
}

/// Verb synonyms for command parsing.
const MOVE_VERBS: &[&str] = &["go", "move", "walk", "head", "enter", "climb"];
const LOOK_VERBS: &[&str] = &[
    "look", "l", "examine", "ex", "x", "inspect", "search", "open",
];
const TAKE_VERBS: &[&str] = &["take", "get", "pick", "grab"];
const DROP_VERBS: &[&str] = &["drop", "put", "leave", "discard"];
const USE_VERBS: &[&str] = &["use", "apply", "cut", "inject", "unlock", "fix"];
const INVENTORY_VERBS: &[&str] = &["inventory", "inv", "i"];
const HELP_VERBS: &[&str] = &["help", "h", "?", "commands"];
const QUIT_VERBS: &[&str] = &["quit", "q", "exit", "bye"];

/// Parse a player input string into a command.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    if input.is_empty() {
        return Command::Look { target: None };
    }

    let words: Vec<&str> = input.split_whitespace().collect();
    let verb = words[0].to_lowercase();
    let rest = words.get(1..).unwrap_or(&[]);

    // Check for bare direction
    if let Some(dir) = Direction::parse(&verb) {
        return Command::Move {
            target: dir.name().to_string(),
        };
    }

    if MOVE_VERBS.contains(&verb.as_str()) {
        return parse_move(rest);
    }
    if LOOK_VERBS.contains(&verb.as_str()) {
        return parse_look(rest);
    }
    if TAKE_VERBS.contains(&verb.as_str()) {
        return parse_take(rest);
    }
    if DROP_VERBS.contains(&verb.as_str()) {
        return parse_drop(rest);
    }
    if USE_VERBS.contains(&verb.as_str()) {
        return parse_use(rest);
    }
    if INVENTORY_VERBS.contains(&verb.as_str()) {
        return Command::Inventory;
    }
    if HELP_VERBS.contains(&verb.as_str()) {
        return parse_help(rest);
    }
    if QUIT_VERBS.contains(&verb.as_str()) {
        return Command::Quit;
    }

    Command::Unknown {
        input: input.to_string(),
    }
}

fn parse_move(rest: &[&str]) -> Command {
    let words = skip_word(rest, &["to", "through", "the"]);
    if words.is_empty() {
        return Command::Unknown {
            input: "go where?".to_string(),
        };
    }

    match Direction::parse(words[0]) {
        Some(dir) if words.len() == 1 => Command::Move {
            target: dir.name().to_string(),
        },
        _ => Command::Move {
            target: words.join(" "),
        },
    }
}

fn parse_look(rest: &[&str]) -> Command {
    let target_words = skip_word(rest, &["at", "in", "inside"]);
    if target_words.is_empty() {
        Command::Look { target: None }
    } else {
        Command::Look {
            target: Some(target_words.join(" ")),
        }
    }
}

fn parse_take(rest: &[&str]) -> Command {
    // Skip "up" if present (pick up)
    let item_words = skip_word(rest, &["up"]);
    if item_words.is_empty() {
        Command::Unknown {
            input: "take what?".to_string(),
        }
    } else {
        Command::Take {
            item: item_words.join(" "),
        }
    }
}

fn parse_drop(rest: &[&str]) -> Command {
    let item_words = skip_word(rest, &["down"]);
    if item_words.is_empty() {
        return Command::Unknown {
            input: "drop what?".to_string(),
        };
    }

    Command::Drop {
        item: item_words.join(" "),
    }
}

fn parse_use(rest: &[&str]) -> Command {
    // Only the item before "on"/"with" drives the puzzle dispatch
    let item_words = match rest
        .iter()
        .position(|w| w.eq_ignore_ascii_case("on") || w.eq_ignore_ascii_case("with"))
    {
        Some(split_pos) => &rest[..split_pos],
        None => rest,
    };

    if item_words.is_empty() {
        Command::Unknown {
            input: "use what?".to_string(),
        }
    } else {
        Command::Use {
            item: item_words.join(" "),
        }
    }
}

fn parse_help(rest: &[&str]) -> Command {
    if rest.is_empty() {
        Command::Help { topic: None }
    } else {
        Command::Help {
            topic: Some(rest.join(" ")),
        }
    }
}

/// Drop one leading filler word, if present.
fn skip_word<'a, 'b>(rest: &'a [&'b str], fillers: &[&str]) -> &'a [&'b str] {
    match rest.first() {
        Some(first) if fillers.iter().any(|f| first.eq_ignore_ascii_case(f)) => &rest[1..],
        _ => rest,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn moving(target: &str) -> Command {
        Command::Move {
            target: target.to_string(),
        }
    }

    #[test]
    fn parse_bare_direction() {
        assert_eq!(parse_command("north"), moving("north"));
        assert_eq!(parse_command("n"), moving("north"));
        assert_eq!(parse_command("D"), moving("down"));
    }

    #[test]
    fn parse_go() {
        assert_eq!(parse_command("go east"), moving("east"));
        assert_eq!(parse_command("walk to w"), moving("west"));
        assert_eq!(parse_command("go through the lead door"), moving("the lead door"));
        assert_eq!(parse_command("enter garage"), moving("garage"));
        assert_eq!(
            parse_command("go"),
            Command::Unknown {
                input: "go where?".to_string()
            }
        );
    }

    #[test]
    fn parse_look() {
        assert_eq!(parse_command("look"), Command::Look { target: None });
        assert_eq!(parse_command("l"), Command::Look { target: None });
        assert_eq!(
            parse_command("examine corpse"),
            Command::Look {
                target: Some("corpse".to_string())
            }
        );
        assert_eq!(
            parse_command("look in fridge"),
            Command::Look {
                target: Some("fridge".to_string())
            }
        );
        assert_eq!(
            parse_command("open fridge"),
            Command::Look {
                target: Some("fridge".to_string())
            }
        );
    }

    #[test]
    fn parse_take_and_drop() {
        assert_eq!(
            parse_command("pick up the scalpel"),
            Command::Take {
                item: "the scalpel".to_string()
            }
        );
        assert_eq!(
            parse_command("get parka"),
            Command::Take {
                item: "parka".to_string()
            }
        );
        assert_eq!(
            parse_command("put down parka"),
            Command::Drop {
                item: "parka".to_string()
            }
        );
    }

    #[test]
    fn parse_use_variants() {
        assert_eq!(
            parse_command("use key"),
            Command::Use {
                item: "key".to_string()
            }
        );
        assert_eq!(
            parse_command("use scalpel on key"),
            Command::Use {
                item: "scalpel".to_string()
            }
        );
        assert_eq!(
            parse_command("inject serum"),
            Command::Use {
                item: "serum".to_string()
            }
        );
        assert_eq!(
            parse_command("use"),
            Command::Unknown {
                input: "use what?".to_string()
            }
        );
    }

    #[test]
    fn parse_misc() {
        assert_eq!(parse_command("i"), Command::Inventory);
        assert_eq!(parse_command("help"), Command::Help { topic: None });
        assert_eq!(parse_command("quit"), Command::Quit);
        assert_eq!(parse_command(""), Command::Look { target: None });
        assert_eq!(
            parse_command("dance wildly"),
            Command::Unknown {
                input: "dance wildly".to_string()
            }
        );
    }
}
