//! Compass and vertical directions, and the token reversal table used to
//! build the far side of every exit.

use std::fmt;

/// Direction an exit leads in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// North.
    North,
    /// South.
    South,
    /// East.
    East,
    /// West.
    West,
    /// Up.
    Up,
    /// Down.
    Down,
}

/// Fixed pairs of opposite tokens, full names and abbreviations.
const REVERSAL_TABLE: &[(&str, &str)] = &[
    ("north", "south"),
    ("south", "north"),
    ("east", "west"),
    ("west", "east"),
    ("up", "down"),
    ("down", "up"),
    ("n", "s"),
    ("s", "n"),
    ("e", "w"),
    ("w", "e"),
    ("u", "d"),
    ("d", "u"),
];

impl Direction {
    /// Every direction, in display order.
    pub const ALL: [Direction; 6] = [
        Self::North,
        Self::South,
        Self::East,
        Self::West,
        Self::Up,
        Self::Down,
    ];

    /// Parse a direction from a full name or abbreviation.
    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            "u" | "up" => Some(Self::Up),
            "d" | "down" => Some(Self::Down),
            _ => None,
        }
    }

    /// Full lowercase name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::North => "north",
            Self::South => "south",
            Self::East => "east",
            Self::West => "west",
            Self::Up => "up",
            Self::Down => "down",
        }
    }

    /// Canonical abbreviation.
    pub fn abbreviation(&self) -> &'static str {
        match self {
            Self::North => "n",
            Self::South => "s",
            Self::East => "e",
            Self::West => "w",
            Self::Up => "u",
            Self::Down => "d",
        }
    }

    /// The direction pointing back the way this one came.
    pub fn opposite(&self) -> Self {
        match self {
            Self::North => Self::South,
            Self::South => Self::North,
            Self::East => Self::West,
            Self::West => Self::East,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Reverse a direction token. Tokens outside the table come back unchanged.
pub fn reverse_token(token: &str) -> String {
    REVERSAL_TABLE
        .iter()
        .find(|(from, _)| *from == token)
        .map_or(token, |(_, to)| *to)
        .to_string()
}
