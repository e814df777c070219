//! VaultFlow RBAC (Role-Based Access Control) Module
//!
//! Maps user roles to permissions and gates UI elements and routes
//! accordingly.
//!
//! # Components
//! - [`PermissionCatalog`] - immutable `Role -> Set<Permission>` data
//! - Authorization engine - [`has_permission`], [`can_access_route`] and
//!   friends, all pure and infallible
//! - Gates - [`PermissionGate`], [`RoleGate`], [`RouteGate`]
//! - [`Navigation`] - role-filtered sidebar entries
//!
//! # Example
//! ```rust,ignore
//! let gate = RouteGate::new().with_allowed_roles([Role::Admin]);
//! match gate.decide(&session.current()) {
//!     RouteDecision::Render => render_team_page(),
//!     RouteDecision::Redirect { target, .. } => navigate(&target),
//!     RouteDecision::Pending => render_skeleton(),
//! }
//! ```

mod catalog;
mod engine;
mod gates;
mod navigation;
mod permissions;
mod roles;

#[cfg(test)]
mod security_tests;

pub use catalog::{CatalogBuilder, PermissionCatalog};
pub use engine::{
    can_access_route, can_perform, display_name, has_permission, has_permission_token, has_role,
};
pub use gates::{
    GateDecision, PermissionGate, RedirectReason, RoleGate, RouteDecision, RouteGate,
    DEFAULT_FALLBACK_ROUTE, DEFAULT_LANDING_ROUTE,
};
pub use navigation::{NavItem, Navigation};
pub use permissions::Permission;
pub use roles::{role_options, Role, RoleOption};

/// Trait for checking if a role has a specific permission
///
/// String-keyed so callers holding untyped identifiers (CLI arguments,
/// configuration) can ask without parsing first. Implementations must deny
/// anything they cannot resolve.
pub trait PermissionChecker: Send + Sync {
    /// Check if a given role has the specified permission
    ///
    /// # Arguments
    /// * `role` - The role name (e.g., "admin", "viewer")
    /// * `permission` - The permission token (e.g., "manage:users")
    fn has_permission(&self, role: &str, permission: &str) -> bool;
}
