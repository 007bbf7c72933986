//! Error types for Matchbook
//!
//! Writes fail loudly with one of the variants below; reads never fail and
//! express absence through `exists == false` or a placeholder record.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use crate::types::{MatchId, Principal};
use thiserror::Error;

/// Result type alias for Matchbook operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for the match registry
///
/// Every registry error is a precondition failure detected before any
/// mutation takes place. The caller is expected to re-submit with corrected
/// input; nothing is retried internally.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Caller does not hold write privilege
    #[error("Unauthorized: {caller} is not the designated writer")]
    Unauthorized {
        /// The rejected caller
        caller: Principal,
    },

    /// A match with the same (name, participant count, date) already exists
    #[error("Duplicate record: {0}")]
    DuplicateRecord(MatchId),

    /// Outcome transition targets an unknown id
    #[error("Match not found: {0}")]
    NotFound(MatchId),

    /// Winner index out of range for a Decided outcome
    #[error("Invalid winner {winner} for match {id} with {participant_count} participants")]
    InvalidWinner {
        /// Target match
        id: MatchId,
        /// Rejected winner index
        winner: i8,
        /// Number of participants of the target match
        participant_count: u8,
    },

    /// Calendar fields do not name a real instant
    #[error("Invalid date: {0}")]
    InvalidDate(String),

    /// Configuration could not be read, parsed or validated
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create an Unauthorized error for the given caller
    pub fn unauthorized(caller: &Principal) -> Self {
        Error::Unauthorized {
            caller: caller.clone(),
        }
    }

    /// Check if this is an authorization failure
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Unauthorized { .. })
    }

    /// Check if this is a duplicate-record failure
    pub fn is_duplicate(&self) -> bool {
        matches!(self, Error::DuplicateRecord(_))
    }

    /// Check if this is a not-found failure
    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound(_))
    }

    /// Check if this is an invalid-winner failure
    pub fn is_invalid_winner(&self) -> bool {
        matches!(self, Error::InvalidWinner { .. })
    }
}
