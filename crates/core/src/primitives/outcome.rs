//! Outcome lifecycle of a match
//!
//! Outcomes are a classification label, not a workflow guard: any outcome
//! may follow any other.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle classification of a match
///
/// ## Codes
///
/// These values are part of the external encoding and MUST NOT change:
/// - Pending = 0
/// - Underway = 1
/// - Draw = 2
/// - Decided = 3
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Outcome {
    /// Not started yet (initial state of every match)
    #[default]
    Pending,
    /// In progress
    Underway,
    /// Finished without a winner
    Draw,
    /// Finished with a winner
    Decided,
}

impl Outcome {
    /// All outcomes in code order
    pub const ALL: [Outcome; 4] = [
        Outcome::Pending,
        Outcome::Underway,
        Outcome::Draw,
        Outcome::Decided,
    ];

    /// Stable numeric code
    pub const fn as_u8(self) -> u8 {
        match self {
            Outcome::Pending => 0,
            Outcome::Underway => 1,
            Outcome::Draw => 2,
            Outcome::Decided => 3,
        }
    }

    /// Parse from a numeric code
    ///
    /// Returns None for codes outside 0..=3.
    pub const fn from_u8(code: u8) -> Option<Self> {
        match code {
            0 => Some(Outcome::Pending),
            1 => Some(Outcome::Underway),
            2 => Some(Outcome::Draw),
            3 => Some(Outcome::Decided),
            _ => None,
        }
    }

    /// Whether this outcome carries a meaningful winner
    pub const fn has_winner(self) -> bool {
        matches!(self, Outcome::Decided)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Outcome::Pending => "pending",
            Outcome::Underway => "underway",
            Outcome::Draw => "draw",
            Outcome::Decided => "decided",
        };
        f.write_str(s)
    }
}
