//! Registry configuration via `matchbook.toml`
//!
//! Read once by [`Registry::from_config`](crate::Registry::from_config).
//! Every field is optional; an empty file yields [`RegistryConfig::default`].
//! A file is only written on request, never as a side effect of loading.

use matchbook_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::path::Path;
use tracing::info;

/// Config file name
pub const CONFIG_FILE_NAME: &str = "matchbook.toml";

/// Registry configuration loaded from `matchbook.toml`.
///
/// # Example
///
/// ```toml
/// owner = "ops"
/// seed_sample_matches = false
/// initial_capacity = 64
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Principal that initially holds write privilege
    #[serde(default = "default_owner")]
    pub owner: String,
    /// Insert the sample fixtures at startup
    #[serde(default)]
    pub seed_sample_matches: bool,
    /// Number of records to pre-allocate room for
    #[serde(default = "default_initial_capacity")]
    pub initial_capacity: usize,
}

fn default_owner() -> String {
    "owner".to_string()
}

fn default_initial_capacity() -> usize {
    64
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            owner: default_owner(),
            seed_sample_matches: false,
            initial_capacity: default_initial_capacity(),
        }
    }
}

impl RegistryConfig {
    /// Check the configuration for values the registry cannot run with
    ///
    /// # Errors
    ///
    /// Returns `Config` if the owner is empty or blank.
    pub fn validate(&self) -> Result<()> {
        if self.owner.trim().is_empty() {
            return Err(Error::Config("owner must not be empty".to_string()));
        }
        Ok(())
    }

    /// Returns the default config file content with comments.
    pub fn default_toml() -> &'static str {
        r#"# Matchbook registry configuration
#
# Principal that holds write privilege at startup.
# Only this principal may insert matches or change outcomes until it
# transfers ownership.
owner = "owner"

# Insert the built-in sample fixtures at startup (default: false)
seed_sample_matches = false

# Number of records to pre-allocate room for (default: 64)
initial_capacity = 64
"#
    }

    /// Load a config file, falling back to defaults for absent fields
    ///
    /// # Errors
    ///
    /// `Config` if the file is unreadable, is not valid TOML, or fails
    /// [`validate`](Self::validate).
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| file_error("read", path, e))?;
        let config: Self = toml::from_str(&text).map_err(|e| file_error("parse", path, e))?;
        config.validate()?;

        info!(target: "matchbook::config", path = %path.display(), owner = %config.owner, "Loaded config");
        Ok(config)
    }

    /// Create `path` with [`default_toml`](Self::default_toml) unless a file is already there
    ///
    /// An existing file is left untouched, whatever it contains.
    pub fn write_default_if_missing(path: &Path) -> Result<()> {
        if path.exists() {
            return Ok(());
        }
        std::fs::write(path, Self::default_toml()).map_err(|e| file_error("create", path, e))?;
        info!(target: "matchbook::config", path = %path.display(), "Wrote default config");
        Ok(())
    }

    /// Save this config to `path`, replacing any existing file
    ///
    /// The commented template is not preserved; only the values are written.
    pub fn write_to_file(&self, path: &Path) -> Result<()> {
        let text = toml::to_string_pretty(self).map_err(|e| file_error("encode", path, e))?;
        std::fs::write(path, text).map_err(|e| file_error("write", path, e))
    }
}

fn file_error(action: &str, path: &Path, cause: impl Display) -> Error {
    Error::Config(format!("cannot {action} {}: {cause}", path.display()))
}
