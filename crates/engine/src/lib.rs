//! Registry engine for Matchbook
//!
//! This crate layers the public operations over the match store:
//! - Registry: insert, outcome transitions, lookups and enumeration
//! - Authority: the write-privilege capability the registry consults
//! - RegistryConfig: `matchbook.toml` configuration
//! - Seeding: sample fixtures inserted through the public API
//! - Metrics: write counters
//!
//! The registry is the only component that knows about authorization and
//! outcome rules; the store only knows about identity and ordering.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod authority;
pub mod config;
pub mod metrics;
pub mod registry;
pub mod seed;

pub use authority::{AllowAll, Authority, OwnerAuthority};
pub use config::{RegistryConfig, CONFIG_FILE_NAME};
pub use metrics::{MetricsSnapshot, RegistryMetrics};
pub use registry::Registry;
pub use seed::seed_sample_matches;
