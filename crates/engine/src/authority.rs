//! Write-privilege capability
//!
//! The registry never decides who may write. It asks an injected
//! [`Authority`] before every mutation and fails with `Unauthorized` when the
//! answer is no.

use matchbook_core::{Error, Principal, Result};
use parking_lot::RwLock;
use tracing::{info, warn};

/// Decides whether a caller may mutate the registry
pub trait Authority: Send + Sync {
    /// Whether `caller` currently holds write privilege
    fn is_authorized_writer(&self, caller: &Principal) -> bool;
}

/// Single designated owner, transferable by the current owner
///
/// Exactly one principal holds write privilege at any time.
#[derive(Debug)]
pub struct OwnerAuthority {
    owner: RwLock<Principal>,
}

impl OwnerAuthority {
    /// Create an authority with `owner` as the designated writer
    pub fn new(owner: Principal) -> Self {
        Self {
            owner: RwLock::new(owner),
        }
    }

    /// The current owner
    pub fn owner(&self) -> Principal {
        self.owner.read().clone()
    }

    /// Hand write privilege to `new_owner`
    ///
    /// # Errors
    ///
    /// Returns `Unauthorized` if `caller` is not the current owner.
    pub fn transfer(&self, caller: &Principal, new_owner: Principal) -> Result<()> {
        let mut owner = self.owner.write();
        if *owner != *caller {
            warn!(target: "matchbook::authority", caller = %caller, "Ownership transfer rejected");
            return Err(Error::unauthorized(caller));
        }
        info!(
            target: "matchbook::authority",
            from = %owner,
            to = %new_owner,
            "Ownership transferred"
        );
        *owner = new_owner;
        Ok(())
    }
}

impl Authority for OwnerAuthority {
    fn is_authorized_writer(&self, caller: &Principal) -> bool {
        *self.owner.read() == *caller
    }
}

/// Grants write privilege to every caller
///
/// For tests and offline tooling only.
#[derive(Debug, Default, Clone, Copy)]
pub struct AllowAll;

impl Authority for AllowAll {
    fn is_authorized_writer(&self, _caller: &Principal) -> bool {
        true
    }
}
