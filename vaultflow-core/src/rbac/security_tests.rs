//! Isolation and fail-closed properties of the authorization path
//!
//! These exercise the catalog, the engine and the session manager together.

use super::*;
use crate::session::{DemoIdentityProvider, MemoryRoleStore, SessionManager, SessionManagerConfig};
use std::sync::Arc;

fn session() -> SessionManager {
    SessionManager::new(DemoIdentityProvider::new(), MemoryRoleStore::new())
        .with_config(SessionManagerConfig::immediate())
}

#[test]
fn test_no_admin_permission_survives_switch_to_viewer() {
    let session = session();
    session.switch_role(Role::Admin);
    assert!(session.has_permission(Permission::ManageUsers));

    session.switch_role(Role::Viewer);

    for permission in Permission::ALL {
        assert_eq!(
            session.has_permission(permission),
            has_permission(Role::Viewer, permission),
            "{} leaked across role switch",
            permission
        );
    }
    assert!(!session.has_permission(Permission::ManageUsers));
    assert!(!session.has_permission(Permission::SettingsCompany));
}

#[tokio::test]
async fn test_switch_matches_fresh_login() {
    let switched = session();
    switched.login("cfo@vaultflow.com", "pw").await.unwrap();
    switched.switch_role(Role::Editor);

    let logged_in = session();
    logged_in.login("accountant@vaultflow.com", "pw").await.unwrap();

    assert_eq!(switched.current(), logged_in.current());
    for permission in Permission::ALL {
        assert_eq!(switched.has_permission(permission), logged_in.has_permission(permission));
    }
}

#[test]
fn test_unknown_tokens_denied_for_every_role_and_session() {
    let session = session();
    assert!(!session.has_permission_token("view:own"));

    for role in Role::ALL {
        session.switch_role(role);
        assert!(!session.has_permission_token("not:a:real:permission"));
        assert!(!session.has_permission_token("*"));
        assert!(!session.has_permission_token("VIEW:OWN"));
        assert!(!PermissionCatalog::builtin().has_permission_token(role, "admin"));
    }
}

#[test]
fn test_checker_denies_unparseable_roles() {
    let checker: Arc<dyn PermissionChecker> = Arc::new(PermissionCatalog::builtin().clone());

    assert!(!checker.has_permission("", "view:own"));
    assert!(!checker.has_permission("administrator", "view:own"));
    assert!(checker.has_permission("Viewer", "view:own"));
}

#[tokio::test]
async fn test_logout_denies_every_gate() {
    let session = session();
    session.switch_role(Role::Admin);
    session.logout().await.unwrap();

    let state = session.current();
    for permission in Permission::ALL {
        assert!(!PermissionGate::new(permission).permits(session.catalog(), &state));
    }
    assert!(!RoleGate::new(Role::ALL.to_vec()).permits(&state));
    assert_eq!(
        RouteGate::new().decide(&state),
        RouteDecision::Redirect {
            target: DEFAULT_FALLBACK_ROUTE.to_string(),
            reason: RedirectReason::Unauthenticated
        }
    );
    assert!(Navigation::dashboard().visible_for(state.role()).is_empty());
}

#[tokio::test]
async fn test_last_login_wins() {
    let session = Arc::new(session());

    let first = {
        let session = session.clone();
        tokio::spawn(async move { session.login("employee@vaultflow.com", "pw").await })
    };
    first.await.unwrap().unwrap();
    session.login("cfo@vaultflow.com", "pw").await.unwrap();

    assert_eq!(session.role(), Some(Role::Admin));
    assert!(!session.is_loading());
}
