//! Permission system for RBAC

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Capability token checked independently of route access
///
/// The set is closed. Untyped tokens coming from the outside are parsed with
/// [`Permission::from_identifier`], which returns `None` for anything unknown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Permission {
    #[serde(rename = "view:own")]
    ViewOwn,
    #[serde(rename = "view:all")]
    ViewAll,
    #[serde(rename = "edit:categories")]
    EditCategories,
    #[serde(rename = "approve:transactions")]
    ApproveTransactions,
    #[serde(rename = "manage:users")]
    ManageUsers,
    #[serde(rename = "manage:vendors")]
    ManageVendors,
    #[serde(rename = "export:reports")]
    ExportReports,
    #[serde(rename = "settings:company")]
    SettingsCompany,
}

impl Permission {
    pub const ALL: [Permission; 8] = [
        Permission::ViewOwn,
        Permission::ViewAll,
        Permission::EditCategories,
        Permission::ApproveTransactions,
        Permission::ManageUsers,
        Permission::ManageVendors,
        Permission::ExportReports,
        Permission::SettingsCompany,
    ];

    /// Token form, e.g. `"manage:vendors"`
    pub fn identifier(&self) -> &'static str {
        match self {
            Permission::ViewOwn => "view:own",
            Permission::ViewAll => "view:all",
            Permission::EditCategories => "edit:categories",
            Permission::ApproveTransactions => "approve:transactions",
            Permission::ManageUsers => "manage:users",
            Permission::ManageVendors => "manage:vendors",
            Permission::ExportReports => "export:reports",
            Permission::SettingsCompany => "settings:company",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Permission::ViewOwn => "View own data only",
            Permission::ViewAll => "View all company data",
            Permission::EditCategories => "Edit transaction categories",
            Permission::ApproveTransactions => "Approve large transactions",
            Permission::ManageUsers => "Manage team members",
            Permission::ManageVendors => "Add and edit vendors",
            Permission::ExportReports => "Export financial reports",
            Permission::SettingsCompany => "Modify company settings",
        }
    }

    /// Resource part of the token (`"manage"` for `"manage:users"`)
    pub fn resource(&self) -> &'static str {
        self.identifier().split(':').next().unwrap_or_default()
    }

    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Permission::ALL.into_iter().find(|p| p.identifier() == identifier)
    }
}

impl fmt::Display for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

impl FromStr for Permission {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Permission::from_identifier(s.trim()).ok_or_else(|| Error::UnknownPermission(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_are_unique() {
        let mut ids: Vec<&str> = Permission::ALL.iter().map(|p| p.identifier()).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), Permission::ALL.len());
    }

    #[test]
    fn test_from_identifier() {
        assert_eq!(Permission::from_identifier("manage:users"), Some(Permission::ManageUsers));
        assert_eq!(Permission::from_identifier("not:a:real:permission"), None);
        assert_eq!(Permission::from_identifier("MANAGE:USERS"), None);
        assert!("settings:company".parse::<Permission>().is_ok());
        assert!(matches!("bogus".parse::<Permission>(), Err(Error::UnknownPermission(_))));
    }

    #[test]
    fn test_serde_uses_token_form() {
        assert_eq!(
            serde_json::to_string(&Permission::ApproveTransactions).unwrap(),
            "\"approve:transactions\""
        );
        let p: Permission = serde_json::from_str("\"export:reports\"").unwrap();
        assert_eq!(p, Permission::ExportReports);
    }

    #[test]
    fn test_resource() {
        assert_eq!(Permission::ManageVendors.resource(), "manage");
        assert_eq!(Permission::SettingsCompany.resource(), "settings");
    }
}
