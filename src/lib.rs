//! Matchbook - append-only registry of sporting-event records
//!
//! Matches are inserted once under an id derived from
//! (name, participant count, date), looked up in constant time, moved through
//! a small outcome lifecycle by a single privileged writer, and enumerated
//! newest-inserted first.
//!
//! # Quick Start
//!
//! ```ignore
//! use matchbook::{Registry, RegistryConfig, Outcome, Principal};
//!
//! let (registry, _authority) = Registry::from_config(&RegistryConfig::default())?;
//! let owner = Principal::new("owner");
//!
//! let id = registry.insert(&owner, "Final", "Reds vs Blues", 2, 1_700_000_000)?;
//! registry.set_outcome(&owner, &id, Outcome::Decided, 0)?;
//!
//! assert_eq!(registry.list_all(), vec![id]);
//! assert!(registry.list_pending().is_empty());
//! ```
//!
//! # Architecture
//!
//! - `matchbook-core`: data model, id derivation, calendar conversion, errors
//! - `matchbook-storage`: the append-only store and its identity index
//! - `matchbook-engine`: the registry service, authorization, config, seeding

pub use matchbook_core::calendar;
pub use matchbook_core::{Error, Match, MatchId, Outcome, Principal, Result, NO_WINNER};
pub use matchbook_engine::*;
pub use matchbook_storage::MatchStore;
