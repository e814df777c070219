//! Configuration system for VaultFlow
//!
//! # Configuration Hierarchy
//!
//! Configuration values are resolved in the following order (highest priority wins):
//!
//! 1. **Environment Variables** (`VAULTFLOW_*`) - Override file config
//! 2. **Config File** (vaultflow.toml) - Override defaults
//! 3. **Defaults** - Lowest priority
//!
//! Each section in the file is deserialized with `#[serde(default)]`, so keys
//! missing from a section keep their defaults. Callers that need a value to
//! win over all three assign the field on the loaded struct.
//!
//! An environment variable that cannot be parsed fails the load.
//!
//! # Example
//!
//! ```no_run
//! use vaultflow_core::config::VaultflowConfig;
//!
//! let config = VaultflowConfig::load()?;
//! config.validate()?;
//! # Ok::<(), anyhow::Error>(())
//! ```
//!
//! ```toml
//! [auth]
//! default_role = "viewer"
//! role_store = "file"
//! role_store_path = "./data/vaultflow.json"
//!
//! [logging]
//! level = "debug"
//! format = "json"
//! ```

pub mod auth;
pub mod logging;

pub use auth::{AuthConfig, RoleStoreKind};
pub use logging::LoggingConfig;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Default configuration file name
pub const CONFIG_FILE: &str = "vaultflow.toml";

/// Complete VaultFlow configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VaultflowConfig {
    pub auth: AuthConfig,
    pub logging: LoggingConfig,
}

impl VaultflowConfig {
    /// Load configuration with full supersedence chain
    ///
    /// Priority order (highest to lowest):
    /// 1. Environment variables
    /// 2. Config file (vaultflow.toml)
    /// 3. Defaults
    pub fn load() -> Result<Self> {
        Self::load_from(CONFIG_FILE)
    }

    /// Load configuration from a specific file
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        let mut config = Self::default();

        if path.exists() {
            let file_config = Self::from_file(path)
                .with_context(|| format!("Failed to load config from {}", path.display()))?;
            config.merge(file_config);
        }

        config.apply_env_vars()?;

        Ok(config)
    }

    /// Load configuration from TOML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        Self::from_toml(&content)
            .with_context(|| format!("Failed to parse TOML config: {}", path.as_ref().display()))
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Replace each section with the one from `other`
    ///
    /// Sections parsed from TOML are already filled with defaults, so a
    /// partial file section does not erase anything it leaves out.
    pub fn merge(&mut self, other: Self) {
        self.auth.merge(other.auth);
        self.logging.merge(other.logging);
    }

    pub fn apply_env_vars(&mut self) -> Result<()> {
        self.apply_env(&|name: &str| std::env::var(name).ok())
    }

    /// Apply `VAULTFLOW_*` overrides resolved through `lookup`
    pub fn apply_env(&mut self, lookup: &impl Fn(&str) -> Option<String>) -> Result<()> {
        self.auth.apply_env(lookup).context("Invalid environment override")?;
        self.logging.apply_env(lookup);
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        self.auth.validate()?;
        self.logging.validate()?;
        Ok(())
    }
}
