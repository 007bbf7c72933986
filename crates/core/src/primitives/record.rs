//! Match record
//!
//! A Match is created once with outcome Pending and winner unset. After that
//! only `outcome` and `winner` may change.

use crate::primitives::outcome::Outcome;
use crate::types::MatchId;
use serde::{Deserialize, Serialize};

/// Winner value meaning "no winner set"
pub const NO_WINNER: i8 = -1;

/// Conventional separator between participant names
///
/// The store never parses participants; this is only used by read helpers.
pub const PARTICIPANT_DELIMITER: &str = " vs ";

/// One sporting-event record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    /// Derived identifier (primary key)
    pub id: MatchId,
    /// Display label, not unique
    pub name: String,
    /// Delimiter-separated participant names
    pub participants: String,
    /// Number of participants
    pub participant_count: u8,
    /// Opaque timestamp supplied by the caller
    pub date: u64,
    /// Current lifecycle state
    pub outcome: Outcome,
    /// Index of the winning participant, or `NO_WINNER`
    ///
    /// Only meaningful when `outcome` is Decided. Not cleared when the
    /// outcome later moves away from Decided.
    pub winner: i8,
}

impl Match {
    /// Create a fresh Pending match, deriving its id
    pub fn new(
        name: impl Into<String>,
        participants: impl Into<String>,
        participant_count: u8,
        date: u64,
    ) -> Self {
        let name = name.into();
        Self {
            id: MatchId::derive(&name, participant_count, date),
            name,
            participants: participants.into(),
            participant_count,
            date,
            outcome: Outcome::Pending,
            winner: NO_WINNER,
        }
    }

    /// The null-object record returned by reads of an absent id
    ///
    /// Carries the requested id, empty text fields, zero count and date,
    /// outcome Pending and no winner.
    pub fn placeholder(id: MatchId) -> Self {
        Self {
            id,
            name: String::new(),
            participants: String::new(),
            participant_count: 0,
            date: 0,
            outcome: Outcome::Pending,
            winner: NO_WINNER,
        }
    }

    /// Whether this record looks like a placeholder
    ///
    /// A record inserted with an empty name, no participants and a zero
    /// date is indistinguishable from its placeholder; use `exists` when
    /// that case matters.
    pub fn is_placeholder(&self) -> bool {
        *self == Self::placeholder(self.id)
    }

    /// Check a winner index against this match's participant count
    pub fn is_winner_valid(&self, winner: i8) -> bool {
        winner >= 0 && (winner as u16) < self.participant_count as u16
    }

    /// Split the participants text on the conventional delimiter
    pub fn participant_names(&self) -> Vec<&str> {
        if self.participants.is_empty() {
            return Vec::new();
        }
        self.participants
            .split(PARTICIPANT_DELIMITER)
            .map(str::trim)
            .collect()
    }

    /// Name of the winning participant, if the match is Decided
    pub fn winner_name(&self) -> Option<&str> {
        if !self.outcome.has_winner() || !self.is_winner_valid(self.winner) {
            return None;
        }
        self.participant_names().get(self.winner as usize).copied()
    }
}
