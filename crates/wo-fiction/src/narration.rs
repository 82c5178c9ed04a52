//! In-fiction text produced by every verb.

use std::fmt;

/// How a piece of narration should be presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    /// The attempt failed outright.
    Failure,
    /// A soft refusal or a warning.
    Caution,
    /// The attempt worked.
    Success,
    /// Movement between rooms.
    Travel,
    /// A story beat.
    Event,
    /// Plain description.
    Info,
    /// A setup or configuration defect. Never produced by reachable play.
    Diagnostic,
}

/// A line of narrative output with its tone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narration {
    /// Presentation hint.
    pub tone: Tone,
    /// The text itself.
    pub text: String,
}

impl Narration {
    /// Create a narration.
    pub fn new(tone: Tone, text: impl Into<String>) -> Self {
        Self {
            tone,
            text: text.into(),
        }
    }

    /// A failed attempt.
    pub fn failure(text: impl Into<String>) -> Self {
        Self::new(Tone::Failure, text)
    }

    /// A soft refusal or warning.
    pub fn caution(text: impl Into<String>) -> Self {
        Self::new(Tone::Caution, text)
    }

    /// A successful attempt.
    pub fn success(text: impl Into<String>) -> Self {
        Self::new(Tone::Success, text)
    }

    /// Movement between rooms.
    pub fn travel(text: impl Into<String>) -> Self {
        Self::new(Tone::Travel, text)
    }

    /// A story beat.
    pub fn event(text: impl Into<String>) -> Self {
        Self::new(Tone::Event, text)
    }

    /// Plain description.
    pub fn info(text: impl Into<String>) -> Self {
        Self::new(Tone::Info, text)
    }

    /// An internal defect. Logged at error level as well.
    pub fn diagnostic(text: impl Into<String>) -> Self {
        let text = text.into();
        tracing::error!(%text, "diagnostic narration");
        Self::new(Tone::Diagnostic, text)
    }

    /// Whether this narration reports an internal defect.
    pub fn is_diagnostic(&self) -> bool {
        self.tone == Tone::Diagnostic
    }
}

impl fmt::Display for Narration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_diagnostic() {
            write!(f, "[internal] {}", self.text)
        } else {
            f.write_str(&self.text)
        }
    }
}
