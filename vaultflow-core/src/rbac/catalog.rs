//! Declarative permission catalog
//!
//! The catalog is the immutable `Role -> Set<Permission>` mapping every
//! authorization answer is computed from. Role tiers are declared as explicit
//! sets, not inferred from [`Role::level`]:
//!
//! ```rust,ignore
//! let catalog = CatalogBuilder::new()
//!     .with_role(Role::Viewer, [Permission::ViewOwn])
//!     .with_role(Role::Editor, [Permission::ViewOwn, Permission::ViewAll])
//!     .with_role(Role::Admin, Permission::ALL)
//!     .build_monotonic()?;
//! ```

use super::{Permission, PermissionChecker, Role};
use crate::error::{Error, Result};
use lazy_static::lazy_static;
use std::collections::{BTreeSet, HashMap};

lazy_static! {
    static ref BUILTIN: PermissionCatalog = PermissionCatalog::from_definitions(vec![
        (Role::Viewer, BTreeSet::from([Permission::ViewOwn])),
        (
            Role::Editor,
            BTreeSet::from([
                Permission::ViewOwn,
                Permission::ViewAll,
                Permission::EditCategories,
                Permission::ManageVendors,
                Permission::ExportReports,
            ]),
        ),
        (Role::Admin, Permission::ALL.into_iter().collect()),
    ]);
}

/// Immutable mapping of roles to the permissions they hold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionCatalog {
    roles: HashMap<Role, BTreeSet<Permission>>,
}

impl PermissionCatalog {
    /// The catalog shipped with the dashboard
    pub fn builtin() -> &'static PermissionCatalog {
        &BUILTIN
    }

    fn from_definitions(definitions: Vec<(Role, BTreeSet<Permission>)>) -> Self {
        Self { roles: definitions.into_iter().collect() }
    }

    /// Permissions held by `role`
    pub fn permissions_of(&self, role: Role) -> &BTreeSet<Permission> {
        // Builders reject catalogs missing a role, so the index always hits.
        &self.roles[&role]
    }

    pub fn has_permission(&self, role: Role, permission: Permission) -> bool {
        self.permissions_of(role).contains(&permission)
    }

    /// String-token check; unknown tokens are denied
    pub fn has_permission_token(&self, role: Role, token: &str) -> bool {
        match Permission::from_identifier(token) {
            Some(permission) => self.has_permission(role, permission),
            None => {
                log::debug!("Denying unknown permission token '{}' for role {}", token, role);
                false
            }
        }
    }

    /// First `(lower, higher, permission)` breaking viewer ⊆ editor ⊆ admin
    pub fn monotonicity_violation(&self) -> Option<(Role, Role, Permission)> {
        let tiers = [Role::Viewer, Role::Editor, Role::Admin];
        tiers.windows(2).find_map(|pair| {
            let (lower, higher) = (pair[0], pair[1]);
            self.permissions_of(lower)
                .difference(self.permissions_of(higher))
                .next()
                .map(|&permission| (lower, higher, permission))
        })
    }

    pub fn is_monotonic(&self) -> bool {
        self.monotonicity_violation().is_none()
    }
}

impl Default for PermissionCatalog {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

impl PermissionChecker for PermissionCatalog {
    fn has_permission(&self, role: &str, permission: &str) -> bool {
        match role.parse::<Role>() {
            Ok(role) => self.has_permission_token(role, permission),
            Err(_) => false,
        }
    }
}

/// Builder for custom catalogs
#[derive(Debug, Clone, Default)]
pub struct CatalogBuilder {
    roles: Vec<(Role, BTreeSet<Permission>)>,
}

impl CatalogBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare the full permission set of a role
    ///
    /// Declaring the same role twice replaces the earlier set.
    pub fn with_role(mut self, role: Role, permissions: impl IntoIterator<Item = Permission>) -> Self {
        self.roles.retain(|(r, _)| *r != role);
        self.roles.push((role, permissions.into_iter().collect()));
        self
    }

    /// Build a catalog, requiring every role to be declared
    pub fn build(self) -> Result<PermissionCatalog> {
        if let Some(missing) = Role::ALL.iter().find(|role| !self.roles.iter().any(|(r, _)| r == *role)) {
            return Err(Error::InvalidCatalog(format!("role '{}' has no permission set", missing)));
        }
        Ok(PermissionCatalog::from_definitions(self.roles))
    }

    /// Build a catalog and additionally enforce viewer ⊆ editor ⊆ admin
    pub fn build_monotonic(self) -> Result<PermissionCatalog> {
        let catalog = self.build()?;
        if let Some((lower, higher, permission)) = catalog.monotonicity_violation() {
            return Err(Error::InvalidCatalog(format!(
                "'{}' is granted to {} but not to {}",
                permission, lower, higher
            )));
        }
        Ok(catalog)
    }
}
