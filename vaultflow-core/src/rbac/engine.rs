//! Authorization engine
//!
//! Pure, side-effect free answers to "can this role do X" and "can this role
//! reach this route". None of these functions fail: anything that cannot be
//! resolved is a denial.

use super::{Permission, PermissionCatalog, Role};
use crate::session::UserProfile;

/// Check a permission against the built-in catalog
pub fn has_permission(role: Role, permission: Permission) -> bool {
    PermissionCatalog::builtin().has_permission(role, permission)
}

/// Check an untyped permission token against the built-in catalog
pub fn has_permission_token(role: Role, token: &str) -> bool {
    PermissionCatalog::builtin().has_permission_token(role, token)
}

/// Route-level check
///
/// `None` and an empty list both mean the route is open to every role.
pub fn can_access_route(role: Role, allowed_roles: Option<&[Role]>) -> bool {
    match allowed_roles {
        None => true,
        Some(roles) if roles.is_empty() => true,
        Some(roles) => roles.contains(&role),
    }
}

pub fn display_name(role: Role) -> &'static str {
    role.display_name()
}

/// Whether `user` holds one of `roles`; false without a user
pub fn has_role(user: Option<&UserProfile>, roles: &[Role]) -> bool {
    user.is_some_and(|u| roles.contains(&u.role))
}

/// Hierarchy shortcut: admin > editor > viewer
pub fn can_perform(user: Option<&UserProfile>, required: Role) -> bool {
    user.is_some_and(|u| u.role.level() >= required.level())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::demo_user;

    #[test]
    fn test_has_permission_scenarios() {
        assert!(!has_permission(Role::Viewer, Permission::ManageUsers));
        assert!(has_permission(Role::Viewer, Permission::ViewOwn));
        assert!(!has_permission(Role::Viewer, Permission::ApproveTransactions));

        assert!(!has_permission(Role::Editor, Permission::ApproveTransactions));
        assert!(has_permission(Role::Editor, Permission::ManageVendors));
        assert!(has_permission(Role::Editor, Permission::EditCategories));
        assert!(has_permission(Role::Editor, Permission::ViewAll));

        assert!(has_permission(Role::Admin, Permission::SettingsCompany));
        assert!(has_permission(Role::Admin, Permission::ManageUsers));
        assert!(has_permission(Role::Admin, Permission::ApproveTransactions));
    }

    #[test]
    fn test_unknown_token_fails_closed() {
        for role in Role::ALL {
            assert!(!has_permission_token(role, "not:a:real:permission"));
            assert!(!has_permission_token(role, ""));
        }
        assert!(has_permission_token(Role::Admin, "manage:users"));
    }

    #[test]
    fn test_unrestricted_route_symmetry() {
        for role in Role::ALL {
            assert!(can_access_route(role, None));
            assert!(can_access_route(role, Some(&[])));
        }
    }

    #[test]
    fn test_route_membership() {
        assert!(!can_access_route(Role::Viewer, Some(&[Role::Admin])));
        assert!(can_access_route(Role::Admin, Some(&[Role::Admin])));
        assert!(can_access_route(Role::Editor, Some(&[Role::Admin, Role::Editor])));
        assert!(!can_access_route(Role::Viewer, Some(&[Role::Admin, Role::Editor])));
    }

    #[test]
    fn test_route_and_permission_checks_are_independent() {
        // Team page is role-gated, "invite" inside it is permission-gated.
        let team_roles = [Role::Admin];
        for role in Role::ALL {
            assert_eq!(
                can_access_route(role, Some(&team_roles)),
                has_permission(role, Permission::ManageUsers)
            );
        }
    }

    #[test]
    fn test_has_role_and_can_perform() {
        let editor = demo_user(Role::Editor);

        assert!(has_role(Some(&editor), &[Role::Admin, Role::Editor]));
        assert!(!has_role(Some(&editor), &[Role::Admin]));
        assert!(!has_role(None, &Role::ALL));

        assert!(can_perform(Some(&editor), Role::Viewer));
        assert!(can_perform(Some(&editor), Role::Editor));
        assert!(!can_perform(Some(&editor), Role::Admin));
        assert!(!can_perform(None, Role::Viewer));
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name(Role::Admin), "Administrator (CFO)");
    }
}
