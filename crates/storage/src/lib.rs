//! Storage layer for Matchbook
//!
//! This crate implements the match store with:
//! - MatchStore: append-only `Vec<Match>` plus id index under one RwLock
//! - PositionIndex: MatchId → position in the sequence
//!
//! # Concurrency
//!
//! Writers serialize on the store's write lock; readers share the read lock.
//! The sequence slot and its index entry are published under the same write
//! guard, so no reader ever sees one without the other.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod index;
pub mod match_store;

pub use index::PositionIndex;
pub use match_store::MatchStore;
