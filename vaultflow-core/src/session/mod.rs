//! Session management for VaultFlow
//!
//! One user drives one session. This module provides:
//! - [`SessionState`] - the current-user record (loading, authenticated or not)
//! - [`SessionManager`] - the single writer: restore, login, logout, switch role
//! - [`IdentityProvider`] - pluggable credential check ([`DemoIdentityProvider`])
//! - [`RoleStore`] - key-value persistence of the last selected role
//!   ([`MemoryRoleStore`], [`FileRoleStore`])
//!
//! # Example
//!
//! ```no_run
//! use vaultflow_core::session::{SessionManager, DemoIdentityProvider, FileRoleStore};
//! use vaultflow_core::rbac::Role;
//!
//! # async fn example() -> vaultflow_core::Result<()> {
//! let session = SessionManager::new(
//!     DemoIdentityProvider::new(),
//!     FileRoleStore::new("./data/vaultflow.json"),
//! );
//! session.restore().await?;
//! session.switch_role(Role::Viewer);
//! # Ok(())
//! # }
//! ```

mod file_store;
mod identity;
mod manager;
mod memory;
mod state;
mod store;
mod user;

pub use file_store::FileRoleStore;
pub use identity::{DemoIdentityProvider, IdentityProvider};
pub use manager::{SessionManager, SessionManagerConfig};
pub use memory::MemoryRoleStore;
pub use state::{SessionPhase, SessionState};
pub use store::{RoleStore, DEMO_ROLE_KEY};
pub use user::{demo_user, UserProfile};
