//! Convenient re-exports for applications embedding VaultFlow access control

pub use crate::config::{AuthConfig, LoggingConfig, RoleStoreKind, VaultflowConfig};
pub use crate::error::{Error, Result};
pub use crate::rbac::{
    can_access_route, can_perform, display_name, has_permission, has_permission_token, has_role,
    CatalogBuilder, GateDecision, NavItem, Navigation, Permission, PermissionCatalog,
    PermissionChecker, PermissionGate, RedirectReason, Role, RoleGate, RoleOption,
    RouteDecision, RouteGate,
};
pub use crate::session::{
    DemoIdentityProvider, FileRoleStore, IdentityProvider, MemoryRoleStore, RoleStore,
    SessionManager, SessionState, UserProfile, DEMO_ROLE_KEY,
};
