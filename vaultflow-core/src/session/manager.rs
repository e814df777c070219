//! Session manager with the authentication lifecycle
//!
//! The `SessionManager` owns the current [`SessionState`] and is the only
//! writer. Every transition replaces the whole state in one step through a
//! `tokio::sync::watch` channel, so any read issued after `login`, `logout` or
//! `switch_role` returns sees the new role.

use super::{
    demo_user, DemoIdentityProvider, FileRoleStore, IdentityProvider, MemoryRoleStore, RoleStore,
    SessionState, UserProfile,
};
use crate::config::{AuthConfig, RoleStoreKind};
use crate::error::{Error, Result};
use crate::rbac::{
    can_access_route, GateDecision, NavItem, Navigation, Permission, PermissionCatalog,
    PermissionGate, Role, RouteDecision, RouteGate,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

/// Session manager configuration
#[derive(Debug, Clone)]
pub struct SessionManagerConfig {
    /// Role used by `restore` when nothing is persisted
    pub default_role: Role,

    /// Simulated delay before a logout completes
    pub logout_delay: Duration,

    /// Simulated delay of the start-up session check
    pub restore_delay: Duration,
}

impl Default for SessionManagerConfig {
    fn default() -> Self {
        Self {
            default_role: Role::Admin,
            logout_delay: Duration::from_millis(500),
            restore_delay: Duration::from_millis(500),
        }
    }
}

impl SessionManagerConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration without any simulated latency
    pub fn immediate() -> Self {
        Self::default().with_logout_delay(Duration::ZERO).with_restore_delay(Duration::ZERO)
    }

    pub fn with_default_role(mut self, role: Role) -> Self {
        self.default_role = role;
        self
    }

    pub fn with_logout_delay(mut self, delay: Duration) -> Self {
        self.logout_delay = delay;
        self
    }

    pub fn with_restore_delay(mut self, delay: Duration) -> Self {
        self.restore_delay = delay;
        self
    }
}

/// Session manager that handles the session lifecycle
///
/// # Example
///
/// ```no_run
/// use vaultflow_core::session::{SessionManager, DemoIdentityProvider, MemoryRoleStore};
/// use vaultflow_core::rbac::Permission;
///
/// # async fn example() -> vaultflow_core::Result<()> {
/// let session = SessionManager::new(DemoIdentityProvider::new(), MemoryRoleStore::new());
/// session.login("accountant@vaultflow.com", "secret").await?;
/// assert!(session.has_permission(Permission::ManageVendors));
/// # Ok(())
/// # }
/// ```
pub struct SessionManager {
    state: watch::Sender<SessionState>,
    catalog: Arc<PermissionCatalog>,
    identity: Arc<dyn IdentityProvider>,
    store: Arc<dyn RoleStore>,
    config: SessionManagerConfig,
}

impl SessionManager {
    /// Create a manager in the loading state, using the built-in catalog
    pub fn new(identity: impl IdentityProvider + 'static, store: impl RoleStore + 'static) -> Self {
        Self::with_parts(Arc::new(identity), Arc::new(store), SessionManagerConfig::default())
    }

    pub fn with_parts(
        identity: Arc<dyn IdentityProvider>,
        store: Arc<dyn RoleStore>,
        config: SessionManagerConfig,
    ) -> Self {
        let (state, _) = watch::channel(SessionState::loading());
        Self {
            state,
            catalog: Arc::new(PermissionCatalog::builtin().clone()),
            identity,
            store,
            config,
        }
    }

    /// Build a manager from the `[auth]` configuration section
    pub fn from_config(config: &AuthConfig) -> Result<Self> {
        let store: Arc<dyn RoleStore> = match config.role_store {
            RoleStoreKind::Memory => Arc::new(MemoryRoleStore::with_key(config.storage_key.clone())),
            RoleStoreKind::File => {
                let path = config.role_store_path.as_deref().ok_or_else(|| {
                    Error::Config("role_store = \"file\" requires role_store_path".to_string())
                })?;
                Arc::new(FileRoleStore::with_key(path, config.storage_key.clone()))
            }
        };
        let identity =
            DemoIdentityProvider::new().with_delay(Duration::from_millis(config.login_delay_ms));
        let manager_config = SessionManagerConfig::new()
            .with_default_role(config.default_role)
            .with_logout_delay(Duration::from_millis(config.logout_delay_ms))
            .with_restore_delay(Duration::from_millis(config.restore_delay_ms));

        Ok(Self::with_parts(Arc::new(identity), store, manager_config))
    }

    /// Replace the permission catalog
    pub fn with_catalog(mut self, catalog: PermissionCatalog) -> Self {
        self.catalog = Arc::new(catalog);
        self
    }

    pub fn with_config(mut self, config: SessionManagerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn catalog(&self) -> &PermissionCatalog {
        &self.catalog
    }

    pub fn config(&self) -> &SessionManagerConfig {
        &self.config
    }

    /// Snapshot of the current session
    pub fn current(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Receiver notified on every session transition
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    pub fn role(&self) -> Option<Role> {
        self.state.borrow().role()
    }

    pub fn user(&self) -> Option<UserProfile> {
        self.state.borrow().user.clone()
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated
    }

    pub fn is_loading(&self) -> bool {
        self.state.borrow().is_loading
    }

    fn replace(&self, next: SessionState) {
        self.state.send_replace(next);
    }

    fn set_loading(&self, loading: bool) {
        self.state.send_modify(|state| state.is_loading = loading);
    }

    fn persist(&self, role: Role) {
        if let Err(e) = self.store.save(role) {
            log::warn!("Failed to persist role {} to {} store: {}", role, self.store.name(), e);
        }
    }

    /// Start-up check: resume the persisted role, or the configured default
    pub async fn restore(&self) -> Result<SessionState> {
        let role = match self.store.load() {
            Ok(Some(role)) => role,
            Ok(None) => self.config.default_role,
            Err(e @ (Error::UnknownRole(_) | Error::Serialization(_) | Error::Storage(_))) => {
                log::warn!(
                    "Ignoring unreadable {} role store ({}), using {}",
                    self.store.name(),
                    e,
                    self.config.default_role
                );
                self.store.clear()?;
                self.config.default_role
            }
            Err(e) => return Err(e),
        };

        if !self.config.restore_delay.is_zero() {
            tokio::time::sleep(self.config.restore_delay).await;
        }

        let next = SessionState::authenticated(demo_user(role));
        self.replace(next.clone());
        log::info!("Session restored as {}", role);
        Ok(next)
    }

    /// Authenticate through the identity provider
    ///
    /// The previous user stays in place (with `is_loading` raised) until the
    /// provider answers; on failure it is left untouched.
    pub async fn login(&self, identifier: &str, secret: &str) -> Result<UserProfile> {
        self.set_loading(true);

        let user = match self.identity.authenticate(identifier, secret).await {
            Ok(user) => user,
            Err(e) => {
                self.set_loading(false);
                log::info!("Login via {} provider refused: {}", self.identity.name(), e);
                return Err(e);
            }
        };

        self.persist(user.role);
        self.replace(SessionState::authenticated(user.clone()));
        log::info!("User {} logged in as {}", user.email, user.role);
        Ok(user)
    }

    pub async fn logout(&self) -> Result<()> {
        self.set_loading(true);

        if !self.config.logout_delay.is_zero() {
            tokio::time::sleep(self.config.logout_delay).await;
        }

        if let Err(e) = self.store.clear() {
            log::warn!("Failed to clear persisted role from {} store: {}", self.store.name(), e);
        }

        let previous = self.state.send_replace(SessionState::unauthenticated());
        if let Some(user) = previous.user {
            log::info!("User {} logged out", user.email);
        }
        Ok(())
    }

    /// Demo impersonation: become the demo user of `role` immediately
    pub fn switch_role(&self, role: Role) {
        self.persist(role);
        self.replace(SessionState::authenticated(demo_user(role)));
        log::info!("Switched session role to {}", role);
    }

    /// Permission check against the current role; false without a session
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.role().is_some_and(|role| self.catalog.has_permission(role, permission))
    }

    pub fn has_permission_token(&self, token: &str) -> bool {
        self.role().is_some_and(|role| self.catalog.has_permission_token(role, token))
    }

    /// Route check against the current role; false without a session
    pub fn can_access_route(&self, allowed_roles: Option<&[Role]>) -> bool {
        self.role().is_some_and(|role| can_access_route(role, allowed_roles))
    }

    pub fn require_permission<T>(&self, gate: &PermissionGate, content: T, fallback: T) -> GateDecision<T> {
        gate.evaluate(&self.catalog, &self.current(), content, fallback)
    }

    pub fn check_route(&self, gate: &RouteGate) -> RouteDecision {
        gate.decide(&self.current())
    }

    /// Navigation entries visible to the current session
    pub fn visible_navigation<'a>(&self, navigation: &'a Navigation) -> Vec<&'a NavItem> {
        navigation.visible_for(self.role())
    }
}
