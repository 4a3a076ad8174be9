//! End-of-game rating from the remaining peg count.
//!
//! Presentation policy, not rules: the engine never consults this. It is
//! provided so callers share one canonical mapping for the "game over"
//! message.

use serde::{Deserialize, Serialize};

/// How well a finished game went, judged by the pegs left on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Rating {
    /// One peg left — the puzzle is solved.
    Genius,
    /// Two pegs left.
    PrettySmart,
    /// Three pegs left.
    Dumb,
    /// Four pegs left.
    Ignoramus,
    /// Anything else.
    Other,
}

impl Rating {
    /// Rate a finished game by its remaining peg count.
    ///
    /// ```
    /// use peg_triangle::Rating;
    ///
    /// assert_eq!(Rating::for_remaining(1), Rating::Genius);
    /// assert_eq!(Rating::for_remaining(9), Rating::Other);
    /// ```
    #[must_use]
    pub fn for_remaining(remaining: u32) -> Self {
        match remaining {
            1 => Rating::Genius,
            2 => Rating::PrettySmart,
            3 => Rating::Dumb,
            4 => Rating::Ignoramus,
            _ => Rating::Other,
        }
    }

    /// The user-facing message for this rating.
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Rating::Genius => "You are a genius.",
            Rating::PrettySmart => "You are pretty smart.",
            Rating::Dumb => "You are dumb.",
            Rating::Ignoramus => "You are an EQ-NO-RA-MOOOSE.",
            Rating::Other => "You are impressive in your own way.",
        }
    }
}

impl std::fmt::Display for Rating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
