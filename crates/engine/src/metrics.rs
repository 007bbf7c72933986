//! Write counters for the registry
//!
//! Counters use Relaxed ordering: they are observational only and do not
//! synchronize any other memory.

use std::sync::atomic::{AtomicU64, Ordering};

/// Counters of registry writes
#[derive(Debug, Default)]
pub struct RegistryMetrics {
    inserts: AtomicU64,
    transitions: AtomicU64,
    rejected: AtomicU64,
}

/// Point-in-time copy of [`RegistryMetrics`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MetricsSnapshot {
    /// Successful inserts
    pub inserts: u64,
    /// Successful outcome transitions
    pub transitions: u64,
    /// Writes rejected with an error
    pub rejected: u64,
}

impl RegistryMetrics {
    /// Create zeroed counters
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a successful insert
    pub fn record_insert(&self) {
        self.inserts.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a successful outcome transition
    pub fn record_transition(&self) {
        self.transitions.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a rejected write
    pub fn record_rejected(&self) {
        self.rejected.fetch_add(1, Ordering::Relaxed);
    }

    /// Copy the current counter values
    pub fn snapshot(&self) -> MetricsSnapshot {
        MetricsSnapshot {
            inserts: self.inserts.load(Ordering::Relaxed),
            transitions: self.transitions.load(Ordering::Relaxed),
            rejected: self.rejected.load(Ordering::Relaxed),
        }
    }
}
