//! Core types for Matchbook
//!
//! This module defines the identity types:
//! - MatchId: 32-byte content-derived identifier of a match
//! - Principal: Opaque identity of a caller

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// Identifier of a match
///
/// A MatchId is never chosen by the caller. It is derived from the
/// (name, participant count, date) tuple, so the same event submitted twice
/// maps to the same id regardless of the participants text.
///
/// ## Encoding
///
/// SHA256(name_len || name || participant_count || date)
/// - name_len: u32, little-endian
/// - participant_count: 1 byte
/// - date: u64, little-endian
///
/// This encoding is part of the identifier format and MUST NOT change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct MatchId([u8; 32]);

impl MatchId {
    /// The all-zero id. Never produced by `derive` in practice and never
    /// present in a store.
    pub const ZERO: MatchId = MatchId([0u8; 32]);

    /// Derive the id of a match from its identifying fields
    pub fn derive(name: &str, participant_count: u8, date: u64) -> Self {
        let mut hasher = Sha256::new();

        // Name with length prefix (4 bytes length + content)
        hasher.update((name.len() as u32).to_le_bytes());
        hasher.update(name.as_bytes());

        // Participant count (1 byte)
        hasher.update([participant_count]);

        // Date (8 bytes, little-endian)
        hasher.update(date.to_le_bytes());

        MatchId(hasher.finalize().into())
    }

    /// Create a MatchId from raw bytes
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        MatchId(bytes)
    }

    /// Get the raw bytes of this MatchId
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Check whether this is the zero id
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Parse a MatchId from 64 hex characters (optional `0x` prefix)
    ///
    /// Returns None if the string is not exactly 32 bytes of hex.
    pub fn from_hex(s: &str) -> Option<Self> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        if s.len() != 64 || !s.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let mut bytes = [0u8; 32];
        for (i, byte) in bytes.iter_mut().enumerate() {
            *byte = u8::from_str_radix(&s[i * 2..i * 2 + 2], 16).ok()?;
        }
        Some(MatchId(bytes))
    }
}

impl Default for MatchId {
    fn default() -> Self {
        MatchId::ZERO
    }
}

impl fmt::Display for MatchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{:02x}", b)?;
        }
        Ok(())
    }
}

/// Identity of a caller
///
/// The registry treats principals as opaque; only the authorization
/// capability gives them meaning.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Principal(String);

impl Principal {
    /// Create a principal from any string-like name
    pub fn new(name: impl Into<String>) -> Self {
        Principal(name.into())
    }

    /// Get the principal's name
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Principal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Principal {
    fn from(name: &str) -> Self {
        Principal::new(name)
    }
}
