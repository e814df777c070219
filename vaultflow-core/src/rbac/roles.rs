//! Role management for RBAC

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Privilege tier assigned to a user session
///
/// Access decisions are made against explicit permission sets (see
/// [`PermissionCatalog`](super::PermissionCatalog)); [`Role::level`] only backs
/// the coarse [`can_perform`](super::can_perform) shortcut.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Full access: view all, approve transactions, manage users
    Admin,
    /// View all data and edit categories, but no money movement approval
    Editor,
    /// Own data only
    Viewer,
}

impl Role {
    /// Every role, in the order the role switcher lists them
    pub const ALL: [Role; 3] = [Role::Admin, Role::Editor, Role::Viewer];

    /// Wire identifier ("admin", "editor", "viewer")
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Editor => "editor",
            Role::Viewer => "viewer",
        }
    }

    /// Human-readable label
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator (CFO)",
            Role::Editor => "Editor (Accountant)",
            Role::Viewer => "Viewer (Employee)",
        }
    }

    /// Hierarchy rank: admin > editor > viewer
    pub fn level(&self) -> u8 {
        match self {
            Role::Admin => 3,
            Role::Editor => 2,
            Role::Viewer => 1,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Role::Admin),
            "editor" => Ok(Role::Editor),
            "viewer" => Ok(Role::Viewer),
            _ => Err(Error::UnknownRole(s.to_string())),
        }
    }
}

/// One entry of the demo role switcher
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleOption {
    pub role: Role,
    pub label: &'static str,
    pub current: bool,
}

/// List every role with its label, marking the active one
pub fn role_options(current: Option<Role>) -> Vec<RoleOption> {
    Role::ALL
        .iter()
        .map(|&role| RoleOption { role, label: role.display_name(), current: current == Some(role) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_parsing() {
        assert_eq!("admin".parse::<Role>().unwrap(), Role::Admin);
        assert_eq!(" Editor ".parse::<Role>().unwrap(), Role::Editor);
        assert_eq!("VIEWER".parse::<Role>().unwrap(), Role::Viewer);
        assert!(matches!("root".parse::<Role>(), Err(Error::UnknownRole(_))));
    }

    #[test]
    fn test_role_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Role::Editor).unwrap(), "\"editor\"");
        let role: Role = serde_json::from_str("\"viewer\"").unwrap();
        assert_eq!(role, Role::Viewer);
        assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(Role::Admin.display_name(), "Administrator (CFO)");
        assert_eq!(Role::Editor.display_name(), "Editor (Accountant)");
        assert_eq!(Role::Viewer.display_name(), "Viewer (Employee)");
    }

    #[test]
    fn test_role_options_marks_current() {
        let options = role_options(Some(Role::Editor));
        let roles: Vec<Role> = options.iter().map(|o| o.role).collect();
        assert_eq!(roles, vec![Role::Admin, Role::Editor, Role::Viewer]);
        assert_eq!(options.iter().filter(|o| o.current).count(), 1);
        assert!(options[1].current);

        assert!(role_options(None).iter().all(|o| !o.current));
    }
}
