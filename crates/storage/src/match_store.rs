//! MatchStore: append-only match sequence with an identity index
//!
//! This module implements the registry's storage using:
//! - `Vec<Match>` for the insertion-ordered sequence
//! - `PositionIndex` for O(1) id → position lookups
//! - `parking_lot::RwLock` around BOTH, so they change together
//!
//! # Design Notes
//!
//! - **Append-only**: records are never removed, reordered or inserted in
//!   the middle. Positions are stable for the lifetime of the store.
//! - **Atomic publish**: `append` writes the sequence slot and the index
//!   entry under one write guard. Readers see both or neither.
//! - **Check before write**: duplicates and out-of-range winners are
//!   rejected before any mutation.
//! - **Derived ids only**: `append` takes the record's fields, never an id,
//!   so every stored id is the hash of its own (name, count, date).
//! - **Newest first**: enumeration walks the sequence backwards. Ordering is
//!   by insertion, never by the `date` field.

use parking_lot::RwLock;
use tracing::trace;

use matchbook_core::{Error, Match, MatchId, Outcome, Result};

use crate::index::PositionIndex;

#[derive(Debug, Default)]
struct StoreInner {
    records: Vec<Match>,
    index: PositionIndex,
}

impl StoreInner {
    fn get(&self, id: &MatchId) -> Option<&Match> {
        self.index.get(id).map(|pos| &self.records[pos])
    }
}

/// Append-only store of match records
///
/// Thread-safe through a single `parking_lot::RwLock`. Many readers may run
/// concurrently; writers are serialized.
#[derive(Debug, Default)]
pub struct MatchStore {
    inner: RwLock<StoreInner>,
}

impl MatchStore {
    /// Create a new empty MatchStore
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-sized for `capacity` records
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: RwLock::new(StoreInner {
                records: Vec::with_capacity(capacity),
                index: PositionIndex::with_capacity(capacity),
            }),
        }
    }

    /// Check whether a record with this id exists
    ///
    /// False for any id never appended, including `MatchId::ZERO`.
    pub fn contains(&self, id: &MatchId) -> bool {
        self.inner.read().index.contains(id)
    }

    /// Position of a record in insertion order
    pub fn position(&self, id: &MatchId) -> Option<usize> {
        self.inner.read().index.get(id)
    }

    /// Get a copy of a record
    pub fn get(&self, id: &MatchId) -> Option<Match> {
        self.inner.read().get(id).cloned()
    }

    /// Append a new Pending record at the end of the sequence
    ///
    /// The id is derived here from (name, participant_count, date); callers
    /// cannot choose it. Returns the id and the position assigned to it.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateRecord` if a record with the same id is already
    /// stored. The store is left unchanged in that case.
    pub fn append(
        &self,
        name: &str,
        participants: &str,
        participant_count: u8,
        date: u64,
    ) -> Result<(MatchId, usize)> {
        let record = Match::new(name, participants, participant_count, date);
        let id = record.id;

        let mut inner = self.inner.write();
        if inner.index.contains(&id) {
            return Err(Error::DuplicateRecord(id));
        }

        let position = inner.records.len();
        inner.records.push(record);
        inner.index.insert(id, position);

        trace!(target: "matchbook::store", id = %id, position, "Record appended");
        Ok((id, position))
    }

    /// Set the outcome of a record in place
    ///
    /// `winner` is checked against the record's participant count and
    /// stored only when `outcome` is Decided; otherwise it is ignored and the
    /// stored winner is left as it was.
    ///
    /// # Errors
    ///
    /// - `NotFound` if no record has this id
    /// - `InvalidWinner` if `outcome` is Decided and `winner` is not in
    ///   `0..participant_count`
    ///
    /// The record is unchanged when an error is returned.
    pub fn set_outcome(&self, id: &MatchId, outcome: Outcome, winner: i8) -> Result<()> {
        let mut inner = self.inner.write();
        let position = inner.index.get(id).ok_or(Error::NotFound(*id))?;
        let record = &mut inner.records[position];

        if outcome.has_winner() {
            if !record.is_winner_valid(winner) {
                return Err(Error::InvalidWinner {
                    id: *id,
                    winner,
                    participant_count: record.participant_count,
                });
            }
            record.winner = winner;
        }
        record.outcome = outcome;
        Ok(())
    }

    /// Ids of all records matching `filter`, most recently inserted first
    pub fn ids_newest_first<F>(&self, filter: F) -> Vec<MatchId>
    where
        F: Fn(&Match) -> bool,
    {
        let inner = self.inner.read();
        inner
            .records
            .iter()
            .rev()
            .filter(|m| filter(m))
            .map(|m| m.id)
            .collect()
    }

    /// The most recently inserted record matching `filter`
    pub fn newest<F>(&self, filter: F) -> Option<Match>
    where
        F: Fn(&Match) -> bool,
    {
        let inner = self.inner.read();
        inner.records.iter().rev().find(|m| filter(m)).cloned()
    }

    /// Copy of every record in insertion order
    pub fn snapshot(&self) -> Vec<Match> {
        self.inner.read().records.clone()
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.inner.read().records.len()
    }

    /// Check if the store holds no records
    pub fn is_empty(&self) -> bool {
        self.inner.read().records.is_empty()
    }
}
