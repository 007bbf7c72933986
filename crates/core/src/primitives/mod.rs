//! Primitive types for Matchbook
//!
//! This module defines the canonical data structures of the registry.
//! These types are shared between the `storage` and `engine` crates.
//!
//! ## Design Principle
//!
//! - **matchbook-core** defines canonical semantic types (this module)
//! - **matchbook-storage** owns the records and their ordering
//! - **matchbook-engine** enforces authorization and outcome rules
//!
//! All crates share the same type definitions from core.

pub mod outcome;
pub mod record;

pub use outcome::Outcome;
pub use record::{Match, NO_WINNER, PARTICIPANT_DELIMITER};
