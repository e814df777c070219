use crate::features::world::{parse_role, RbacWorld};
use cucumber::{given, then, when};
use vaultflow_core::rbac::Permission;
use vaultflow_core::session::RoleStore;

// ==================== STORE SETUP ====================

#[given(expr = "the role store contains {string}")]
fn given_raw_stored_role(world: &mut RbacWorld, raw: String) {
    let content = format!("{{\"{}\": \"{}\"}}", world.config.storage_key, raw);
    std::fs::write(world.store_path(), content).expect("Failed to seed role store");
}

#[given("the role file was cut off mid-write")]
fn given_truncated_role_file(world: &mut RbacWorld) {
    let content = format!("{{\"{}\": \"edi", world.config.storage_key);
    std::fs::write(world.store_path(), content).expect("Failed to seed role store");
}

// ==================== LIFECYCLE ====================

#[when("the session is restored")]
async fn when_restored(world: &mut RbacWorld) {
    world.session.restore().await.expect("Restore failed");
}

#[when(expr = "the user logs in as {string}")]
async fn when_login(world: &mut RbacWorld, identifier: String) {
    world.last_error = world.session.login(&identifier, "demo").await.err().map(|e| e.to_string());
}

#[when(expr = "the user switches to the {string} role")]
fn when_switch(world: &mut RbacWorld, role: String) {
    world.session.switch_role(parse_role(&role));
}

#[when("the application restarts")]
fn when_restart(world: &mut RbacWorld) {
    world.restart();
}

#[given("the user has logged out")]
async fn given_logged_out(world: &mut RbacWorld) {
    world.session.logout().await.expect("Logout failed");
}

#[when("the user logs out")]
async fn when_logout(world: &mut RbacWorld) {
    world.session.logout().await.expect("Logout failed");
}

// ==================== ASSERTIONS ====================

#[then(expr = "the current user is {string}")]
fn then_current_user(world: &mut RbacWorld, name: String) {
    let user = world.session.user().expect("Nobody is signed in");
    assert_eq!(user.full_name, name);
}

#[then(expr = "the current role is {string}")]
fn then_current_role(world: &mut RbacWorld, role: String) {
    assert_eq!(world.session.role(), Some(parse_role(&role)));
    assert!(!world.session.is_loading());
}

#[then("the login is refused")]
fn then_login_refused(world: &mut RbacWorld) {
    assert!(world.last_error.is_some(), "Login unexpectedly succeeded");
}

#[then(expr = "the session is granted {string}")]
fn then_session_granted(world: &mut RbacWorld, token: String) {
    assert!(world.session.has_permission_token(&token));
}

#[then(expr = "the session is denied {string}")]
fn then_session_denied(world: &mut RbacWorld, token: String) {
    assert!(!world.session.has_permission_token(&token));
}

#[then("nobody is signed in")]
fn then_signed_out(world: &mut RbacWorld) {
    assert!(!world.session.is_authenticated());
    assert!(world.session.user().is_none());
    assert!(!world.session.is_loading());
}

#[then("every permission is denied")]
fn then_everything_denied(world: &mut RbacWorld) {
    for permission in Permission::ALL {
        assert!(!world.session.has_permission(permission), "{} still granted", permission);
    }
}

#[then(expr = "the role store holds {string}")]
fn then_store_holds(world: &mut RbacWorld, role: String) {
    assert_eq!(world.stored_role(), Some(parse_role(&role)));
}

#[then("the role store is empty")]
fn then_store_empty(world: &mut RbacWorld) {
    assert_eq!(world.store().load().expect("Failed to read role store"), None);
}
