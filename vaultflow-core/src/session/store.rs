//! Role storage trait
//!
//! The only state that survives a restart is the last selected demo role,
//! kept as one key-value pair under a fixed namespace.

use crate::error::Result;
use crate::rbac::Role;

/// Namespace key for the persisted demo role
pub const DEMO_ROLE_KEY: &str = "vaultflow-demo-role";

/// Role storage trait
///
/// Implement this trait to provide custom storage backends for the demo role.
pub trait RoleStore: Send + Sync {
    /// Last saved role, `None` when nothing is stored
    fn load(&self) -> Result<Option<Role>>;

    fn save(&self, role: Role) -> Result<()>;

    /// Forget the stored role
    fn clear(&self) -> Result<()>;

    /// Backend name for logging
    fn name(&self) -> &str;
}

// Implement RoleStore for Arc<S> to allow sharing a store between managers
impl<S: RoleStore + ?Sized> RoleStore for std::sync::Arc<S> {
    fn load(&self) -> Result<Option<Role>> {
        (**self).load()
    }

    fn save(&self, role: Role) -> Result<()> {
        (**self).save(role)
    }

    fn clear(&self) -> Result<()> {
        (**self).clear()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}
