//! Registry: public operations over the match store
//!
//! ## Write path
//!
//! Writes (`insert`, `set_outcome`) check, in order:
//! 1. Write privilege (via the injected [`Authority`])
//! 2. Operation preconditions (duplicate id, unknown id, winner range)
//!
//! All checks run before any mutation. A failed write leaves the store
//! exactly as it was.
//!
//! ## Read path
//!
//! Reads never fail. Absence is reported as `exists == false`, `None` from
//! [`Registry::find`], or the placeholder record from [`Registry::get`] and
//! [`Registry::most_recent`].
//!
//! ## Ordering
//!
//! Enumeration is newest-inserted first. The `date` field plays no part.

use std::sync::Arc;

use matchbook_core::{Error, Match, MatchId, Outcome, Principal, Result};
use matchbook_storage::MatchStore;
use tracing::{debug, info, warn};

use crate::authority::{Authority, OwnerAuthority};
use crate::config::RegistryConfig;
use crate::metrics::{MetricsSnapshot, RegistryMetrics};
use crate::seed::seed_sample_matches;

/// Append-only registry of match records
///
/// Cloning a Registry yields another handle to the same store, authority and
/// metrics. The store is owned by the registry and never handed out, so
/// every write goes through the authority check:
///
/// ```compile_fail
/// use matchbook_engine::{Registry, RegistryConfig};
///
/// let (registry, _) = Registry::from_config(&RegistryConfig::default()).unwrap();
/// let _ = registry.store();
/// ```
#[derive(Clone)]
pub struct Registry {
    store: Arc<MatchStore>,
    authority: Arc<dyn Authority>,
    metrics: Arc<RegistryMetrics>,
}

impl Registry {
    /// Create a registry that takes ownership of `store`
    pub fn new(store: MatchStore, authority: Arc<dyn Authority>) -> Self {
        Self {
            store: Arc::new(store),
            authority,
            metrics: Arc::new(RegistryMetrics::new()),
        }
    }

    /// Build a registry from configuration
    ///
    /// Creates an empty store sized from `initial_capacity`, an
    /// [`OwnerAuthority`] for the configured owner and, when
    /// `seed_sample_matches` is set, inserts the sample fixtures as that
    /// owner. The authority handle is returned so ownership can later be
    /// transferred.
    pub fn from_config(config: &RegistryConfig) -> Result<(Self, Arc<OwnerAuthority>)> {
        config.validate()?;

        let owner = Principal::new(config.owner.clone());
        let authority = Arc::new(OwnerAuthority::new(owner.clone()));
        let store = MatchStore::with_capacity(config.initial_capacity);
        let registry = Self::new(store, authority.clone());

        if config.seed_sample_matches {
            let ids = seed_sample_matches(&registry, &owner)?;
            info!(target: "matchbook::registry", count = ids.len(), "Seeded sample matches");
        }

        Ok((registry, authority))
    }

    fn authorize(&self, caller: &Principal) -> Result<()> {
        if self.authority.is_authorized_writer(caller) {
            Ok(())
        } else {
            Err(Error::unauthorized(caller))
        }
    }

    fn rejected(&self, op: &'static str, err: Error) -> Error {
        self.metrics.record_rejected();
        warn!(target: "matchbook::registry", op, error = %err, "Write rejected");
        err
    }

    // ========== Writes ==========

    /// Insert a new match and return its derived id
    ///
    /// The id is derived from (name, participant_count, date); participants
    /// are not part of it. The new record starts Pending with no winner.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if `caller` lacks write privilege
    /// - `DuplicateRecord` if a match with the same id already exists
    pub fn insert(
        &self,
        caller: &Principal,
        name: &str,
        participants: &str,
        participant_count: u8,
        date: u64,
    ) -> Result<MatchId> {
        self.authorize(caller)
            .map_err(|e| self.rejected("insert", e))?;

        let (id, position) = self
            .store
            .append(name, participants, participant_count, date)
            .map_err(|e| self.rejected("insert", e))?;

        self.metrics.record_insert();
        info!(target: "matchbook::registry", id = %id, position, name, "Match inserted");
        Ok(id)
    }

    /// Move a match to `outcome`
    ///
    /// `winner` is validated and stored only when `outcome` is Decided.
    /// For any other outcome it is ignored and the previously stored winner
    /// is kept as-is. Any outcome may follow any other.
    ///
    /// # Errors
    ///
    /// - `Unauthorized` if `caller` lacks write privilege
    /// - `NotFound` if no match has this id
    /// - `InvalidWinner` if `outcome` is Decided and `winner` is not in
    ///   `0..participant_count`
    pub fn set_outcome(
        &self,
        caller: &Principal,
        id: &MatchId,
        outcome: Outcome,
        winner: i8,
    ) -> Result<()> {
        self.authorize(caller)
            .map_err(|e| self.rejected("set_outcome", e))?;

        self.store
            .set_outcome(id, outcome, winner)
            .map_err(|e| self.rejected("set_outcome", e))?;

        self.metrics.record_transition();
        info!(
            target: "matchbook::registry",
            id = %id,
            outcome = %outcome,
            winner,
            "Outcome updated"
        );
        Ok(())
    }

    // ========== Reads ==========

    /// Whether a match with this id exists
    pub fn exists(&self, id: &MatchId) -> bool {
        self.store.contains(id)
    }

    /// Look up a match, or `None` if absent
    pub fn find(&self, id: &MatchId) -> Option<Match> {
        self.store.get(id)
    }

    /// Look up a match, returning the placeholder record if absent
    ///
    /// The placeholder carries the requested id; see [`Match::placeholder`].
    pub fn get(&self, id: &MatchId) -> Match {
        self.find(id).unwrap_or_else(|| {
            debug!(target: "matchbook::registry", id = %id, "Lookup of unknown id");
            Match::placeholder(*id)
        })
    }

    /// Ids of every match, newest-inserted first
    pub fn list_all(&self) -> Vec<MatchId> {
        self.store.ids_newest_first(|_| true)
    }

    /// Ids of Pending matches, newest-inserted first
    pub fn list_pending(&self) -> Vec<MatchId> {
        self.list_by_outcome(Outcome::Pending)
    }

    /// Ids of matches currently in `outcome`, newest-inserted first
    pub fn list_by_outcome(&self, outcome: Outcome) -> Vec<MatchId> {
        self.store.ids_newest_first(|m| m.outcome == outcome)
    }

    /// The newest match, or the newest Pending match when `pending_only`
    ///
    /// Returns the placeholder record with `MatchId::ZERO` when there is none.
    pub fn most_recent(&self, pending_only: bool) -> Match {
        let found = if pending_only {
            self.store.newest(|m| m.outcome == Outcome::Pending)
        } else {
            self.store.newest(|_| true)
        };
        found.unwrap_or_else(|| Match::placeholder(MatchId::ZERO))
    }

    /// Number of matches
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the registry holds no matches
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Liveness probe; always true
    pub fn ping(&self) -> bool {
        true
    }

    /// Current write counters
    pub fn metrics(&self) -> MetricsSnapshot {
        self.metrics.snapshot()
    }
}

impl std::fmt::Debug for Registry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Registry")
            .field("len", &self.store.len())
            .field("metrics", &self.metrics.snapshot())
            .finish()
    }
}
