//! Role-filtered navigation

use super::{can_access_route, Role};
use serde::{Deserialize, Serialize};

/// Sidebar entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavItem {
    pub title: String,
    pub target: String,
    /// Empty means open to every role
    #[serde(default, rename = "roles")]
    pub allowed_roles: Vec<Role>,
}

impl NavItem {
    pub fn new(title: impl Into<String>, target: impl Into<String>) -> Self {
        Self { title: title.into(), target: target.into(), allowed_roles: Vec::new() }
    }

    pub fn restricted_to(mut self, roles: impl Into<Vec<Role>>) -> Self {
        self.allowed_roles = roles.into();
        self
    }

    pub fn is_visible_to(&self, role: Role) -> bool {
        can_access_route(role, Some(self.allowed_roles.as_slice()))
    }
}

/// Static navigation configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Navigation {
    items: Vec<NavItem>,
}

impl Navigation {
    pub fn new(items: Vec<NavItem>) -> Self {
        Self { items }
    }

    /// The dashboard sidebar
    pub fn dashboard() -> Self {
        Self::new(vec![
            NavItem::new("Dashboard", "/dashboard"),
            NavItem::new("Cash Flow", "/dashboard/cash-flow").restricted_to([Role::Admin, Role::Editor]),
            NavItem::new("Expenses", "/dashboard/expenses"),
            NavItem::new("Vendors", "/dashboard/vendors").restricted_to([Role::Admin, Role::Editor]),
            NavItem::new("Reports", "/dashboard/reports").restricted_to([Role::Admin, Role::Editor]),
            NavItem::new("Team", "/dashboard/team").restricted_to([Role::Admin]),
            NavItem::new("Settings", "/dashboard/settings"),
        ])
    }

    pub fn items(&self) -> &[NavItem] {
        &self.items
    }

    /// Items visible to `role`, in declared order
    pub fn visible_to(&self, role: Role) -> Vec<&NavItem> {
        self.items.iter().filter(|item| item.is_visible_to(role)).collect()
    }

    /// Items visible to an optional session role; nothing without a session
    pub fn visible_for(&self, role: Option<Role>) -> Vec<&NavItem> {
        role.map(|role| self.visible_to(role)).unwrap_or_default()
    }

    pub fn find(&self, target: &str) -> Option<&NavItem> {
        self.items.iter().find(|item| item.target == target)
    }
}

impl Default for Navigation {
    fn default() -> Self {
        Self::dashboard()
    }
}
