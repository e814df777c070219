//! VaultFlow Access Control - Core
//!
//! Role-based access control for the VaultFlow treasury dashboard.
//!
//! # Overview
//!
//! The dashboard itself is presentation; everything that decides *who may see
//! what* lives here:
//!
//! - [`rbac`] - Permission catalog, authorization engine, access gates and
//!   navigation filtering
//! - [`session`] - The single current-user session and its lifecycle
//!   (restore, login, logout, demo role switching)
//! - [`config`] - TOML + environment configuration
//! - [`logging`] - `log` facade backend with human and JSON output
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vaultflow_core::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = VaultflowConfig::load()?;
//!     let session = SessionManager::from_config(&config.auth)?;
//!     session.restore().await?;
//!
//!     if session.has_permission(Permission::ManageVendors) {
//!         println!("vendor onboarding available");
//!     }
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod rbac;
pub mod session;

pub use error::{Error, Result};
pub use rbac::{
    can_access_route, display_name, has_permission, has_permission_token, Permission,
    PermissionCatalog, Role,
};
pub use session::{SessionManager, SessionState, UserProfile};
