//! Core types for Matchbook
//!
//! This crate defines the foundational types used throughout the system:
//! - MatchId: Content-derived 32-byte identifier for a match
//! - Principal: Opaque identity of a caller
//! - Outcome: Lifecycle classification of a match
//! - Match: One sporting-event record
//! - Calendar: Conversion from calendar fields to an absolute timestamp
//! - Error: Error type hierarchy

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod calendar;
pub mod error;
pub mod primitives;
pub mod types;

pub use error::{Error, Result};
pub use primitives::{Match, Outcome, NO_WINNER, PARTICIPANT_DELIMITER};
pub use types::{MatchId, Principal};
