use cucumber::World as CucumberWorld;
use std::fmt;
use std::path::PathBuf;
use tempfile::TempDir;
use vaultflow_core::config::{AuthConfig, RoleStoreKind};
use vaultflow_core::rbac::{Role, RouteDecision};
use vaultflow_core::session::{FileRoleStore, RoleStore, SessionManager};

/// Scenario state: one session backed by a role file in a scratch directory
#[derive(CucumberWorld)]
#[world(init = Self::new)]
pub struct RbacWorld {
    pub session: SessionManager,
    pub config: AuthConfig,
    pub last_decision: Option<RouteDecision>,
    pub last_error: Option<String>,
    /// Role picked by a step without touching the session
    pub subject: Option<Role>,
    _dir: TempDir,
}

impl fmt::Debug for RbacWorld {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RbacWorld")
            .field("state", &self.session.current())
            .field("last_decision", &self.last_decision)
            .field("last_error", &self.last_error)
            .field("subject", &self.subject)
            .finish()
    }
}

impl RbacWorld {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create scenario directory");
        let config = AuthConfig {
            role_store: RoleStoreKind::File,
            role_store_path: Some(dir.path().join("vaultflow.json").to_string_lossy().into_owned()),
            login_delay_ms: 0,
            logout_delay_ms: 0,
            restore_delay_ms: 0,
            ..AuthConfig::default()
        };
        let session = SessionManager::from_config(&config).expect("Failed to build session");

        Self { session, config, last_decision: None, last_error: None, subject: None, _dir: dir }
    }

    pub fn store_path(&self) -> PathBuf {
        PathBuf::from(self.config.role_store_path.clone().unwrap_or_default())
    }

    /// A second handle on the scenario's role file
    pub fn store(&self) -> FileRoleStore {
        FileRoleStore::with_key(self.store_path(), self.config.storage_key.clone())
    }

    /// Drop the in-memory session, as a page reload or process restart would
    pub fn restart(&mut self) {
        self.session = SessionManager::from_config(&self.config).expect("Failed to rebuild session");
    }

    pub fn stored_role(&self) -> Option<Role> {
        self.store().load().expect("Failed to read role store")
    }
}

pub fn parse_role(raw: &str) -> Role {
    raw.parse().unwrap_or_else(|_| panic!("Unknown role in scenario: {}", raw))
}

pub fn parse_roles(raw: &str) -> Vec<Role> {
    raw.split(',').map(str::trim).filter(|s| !s.is_empty()).map(parse_role).collect()
}
