//! Identity providers
//!
//! An identity provider turns login credentials into a [`UserProfile`]. The
//! dashboard only ships a demo provider that derives the role from the login
//! identifier; real deployments plug in their own.

use super::{demo_user, UserProfile};
use crate::error::{Error, Result};
use crate::rbac::Role;
use std::time::Duration;

/// Authentication provider trait
///
/// Implement this trait to add a new authentication backend
#[async_trait::async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Resolve credentials into a user; `Error::InvalidCredentials` on refusal
    async fn authenticate(&self, identifier: &str, secret: &str) -> Result<UserProfile>;

    /// Provider name for logging and identification
    fn name(&self) -> &str;
}

/// Demo provider: the role is guessed from the identifier
///
/// - contains `cfo` or `admin` -> admin
/// - contains `accountant` or `editor` -> editor
/// - anything else -> viewer
#[derive(Debug, Clone, Default)]
pub struct DemoIdentityProvider {
    delay: Duration,
}

impl DemoIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Simulated round-trip before the answer comes back
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn resolve_role(identifier: &str) -> Role {
        if identifier.contains("cfo") || identifier.contains("admin") {
            Role::Admin
        } else if identifier.contains("accountant") || identifier.contains("editor") {
            Role::Editor
        } else {
            Role::Viewer
        }
    }
}

#[async_trait::async_trait]
impl IdentityProvider for DemoIdentityProvider {
    async fn authenticate(&self, identifier: &str, _secret: &str) -> Result<UserProfile> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(Error::InvalidCredentials("identifier is empty".to_string()));
        }

        Ok(demo_user(Self::resolve_role(identifier)))
    }

    fn name(&self) -> &str {
        "demo"
    }
}
