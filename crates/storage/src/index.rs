//! Identity index for the match sequence
//!
//! Maps each MatchId to its position in the append-only sequence. Absence is
//! an explicit `None`, so no position needs to be reserved as a sentinel.

use matchbook_core::MatchId;
use std::collections::HashMap;

/// Secondary index: MatchId → position
///
/// Positions are assigned once on insertion and never change, because the
/// sequence they point into is append-only.
#[derive(Debug, Default)]
pub struct PositionIndex {
    index: HashMap<MatchId, usize>,
}

impl PositionIndex {
    /// Create a new empty PositionIndex
    pub fn new() -> Self {
        Self {
            index: HashMap::new(),
        }
    }

    /// Create an index pre-sized for `capacity` ids
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
        }
    }

    /// Record the position of an id
    ///
    /// Returns false and leaves the index unchanged if the id is already
    /// present.
    pub fn insert(&mut self, id: MatchId, position: usize) -> bool {
        use std::collections::hash_map::Entry;

        match self.index.entry(id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(position);
                true
            }
        }
    }

    /// Get the position of an id
    pub fn get(&self, id: &MatchId) -> Option<usize> {
        self.index.get(id).copied()
    }

    /// Check if an id is indexed
    pub fn contains(&self, id: &MatchId) -> bool {
        self.index.contains_key(id)
    }

    /// Check if the index is empty
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Get the number of indexed ids
    pub fn len(&self) -> usize {
        self.index.len()
    }
}
