//! Authentication and session configuration

use crate::rbac::{Role, DEFAULT_FALLBACK_ROUTE, DEFAULT_LANDING_ROUTE};
use crate::session::DEMO_ROLE_KEY;
use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// Backend for the persisted demo role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoleStoreKind {
    Memory,
    File,
}

impl std::str::FromStr for RoleStoreKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(RoleStoreKind::Memory),
            "file" => Ok(RoleStoreKind::File),
            other => bail!("Invalid role store '{}': must be memory or file", other),
        }
    }
}

/// Authentication configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Role used when no role has been persisted
    /// Env: VAULTFLOW_DEFAULT_ROLE
    /// Default: admin
    pub default_role: Role,

    /// Where the last selected role is kept
    /// Env: VAULTFLOW_ROLE_STORE
    /// Default: memory
    pub role_store: RoleStoreKind,

    /// JSON file used by the file role store
    /// Env: VAULTFLOW_ROLE_STORE_PATH
    pub role_store_path: Option<String>,

    /// Key the role is stored under
    /// Default: "vaultflow-demo-role"
    pub storage_key: String,

    /// Simulated identity check latency
    /// Env: VAULTFLOW_LOGIN_DELAY_MS
    /// Default: 1000
    pub login_delay_ms: u64,

    /// Env: VAULTFLOW_LOGOUT_DELAY_MS
    /// Default: 500
    pub logout_delay_ms: u64,

    /// Env: VAULTFLOW_RESTORE_DELAY_MS
    /// Default: 500
    pub restore_delay_ms: u64,

    /// Where authenticated users lacking a role are sent
    /// Env: VAULTFLOW_LANDING_ROUTE
    /// Default: "/dashboard"
    pub landing_route: String,

    /// Where unauthenticated users are sent
    /// Env: VAULTFLOW_FALLBACK_ROUTE
    /// Default: "/"
    pub fallback_route: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            default_role: Role::Admin,
            role_store: RoleStoreKind::Memory,
            role_store_path: None,
            storage_key: DEMO_ROLE_KEY.to_string(),
            login_delay_ms: 1000,
            logout_delay_ms: 500,
            restore_delay_ms: 500,
            landing_route: DEFAULT_LANDING_ROUTE.to_string(),
            fallback_route: DEFAULT_FALLBACK_ROUTE.to_string(),
        }
    }
}

fn parse_env<T>(lookup: &impl Fn(&str) -> Option<String>, name: &str) -> Result<Option<T>>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(name) {
        None => Ok(None),
        Some(raw) => raw
            .parse()
            .map(Some)
            .map_err(|e| anyhow::anyhow!("Invalid value '{}' for {}: {}", raw, name, e)),
    }
}

impl AuthConfig {
    /// Sections are deserialized with `#[serde(default)]`, so a section read
    /// from the file is already complete and replaces the current one.
    pub fn merge(&mut self, other: Self) {
        *self = other;
    }

    /// Apply overrides from `lookup`; an unparseable value is an error
    pub fn apply_env(&mut self, lookup: &impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(role) = parse_env(lookup, "VAULTFLOW_DEFAULT_ROLE")? {
            self.default_role = role;
        }
        if let Some(kind) = parse_env(lookup, "VAULTFLOW_ROLE_STORE")? {
            self.role_store = kind;
        }
        if let Some(path) = lookup("VAULTFLOW_ROLE_STORE_PATH") {
            self.role_store_path = Some(path);
        }
        if let Some(ms) = parse_env(lookup, "VAULTFLOW_LOGIN_DELAY_MS")? {
            self.login_delay_ms = ms;
        }
        if let Some(ms) = parse_env(lookup, "VAULTFLOW_LOGOUT_DELAY_MS")? {
            self.logout_delay_ms = ms;
        }
        if let Some(ms) = parse_env(lookup, "VAULTFLOW_RESTORE_DELAY_MS")? {
            self.restore_delay_ms = ms;
        }
        if let Some(route) = lookup("VAULTFLOW_LANDING_ROUTE") {
            self.landing_route = route;
        }
        if let Some(route) = lookup("VAULTFLOW_FALLBACK_ROUTE") {
            self.fallback_route = route;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !self.landing_route.starts_with('/') {
            bail!("Invalid landing_route '{}': must start with '/'", self.landing_route);
        }
        if !self.fallback_route.starts_with('/') {
            bail!("Invalid fallback_route '{}': must start with '/'", self.fallback_route);
        }
        if self.landing_route == self.fallback_route {
            bail!("landing_route and fallback_route must differ");
        }
        if self.storage_key.trim().is_empty() {
            bail!("storage_key must not be empty");
        }
        if self.role_store == RoleStoreKind::File && self.role_store_path.is_none() {
            bail!("role_store = \"file\" requires role_store_path");
        }
        Ok(())
    }
}
