use crate::features::world::{parse_role, parse_roles, RbacWorld};
use cucumber::{given, then, when};
use vaultflow_core::rbac::{Navigation, PermissionCatalog, RouteDecision, RouteGate};

// ==================== CATALOG ====================

#[then(expr = "role {string} is granted {string}")]
fn then_role_granted(_world: &mut RbacWorld, role: String, permission: String) {
    let role = parse_role(&role);
    assert!(
        PermissionCatalog::builtin().has_permission_token(role, &permission),
        "{} should hold {}",
        role,
        permission
    );
}

#[then(expr = "role {string} is denied {string}")]
fn then_role_denied(_world: &mut RbacWorld, role: String, permission: String) {
    let role = parse_role(&role);
    assert!(
        !PermissionCatalog::builtin().has_permission_token(role, &permission),
        "{} should not hold {}",
        role,
        permission
    );
}

#[then("the permission catalog is monotonic")]
fn then_catalog_monotonic(_world: &mut RbacWorld) {
    assert_eq!(PermissionCatalog::builtin().monotonicity_violation(), None);
}

// ==================== ROUTES ====================

#[given(expr = "a {string} session")]
fn given_session(world: &mut RbacWorld, role: String) {
    world.session.switch_role(parse_role(&role));
}

#[when("the user opens a page open to everyone")]
fn when_open_page(world: &mut RbacWorld) {
    let gate = RouteGate::from_config(&world.config);
    world.last_decision = Some(world.session.check_route(&gate));
}

#[when(expr = "the user opens a page restricted to {string}")]
fn when_restricted_page(world: &mut RbacWorld, roles: String) {
    let gate = RouteGate::from_config(&world.config).with_allowed_roles(parse_roles(&roles));
    world.last_decision = Some(world.session.check_route(&gate));
}

#[then("the page renders")]
fn then_page_renders(world: &mut RbacWorld) {
    assert_eq!(world.last_decision, Some(RouteDecision::Render));
}

#[then(expr = "the user is redirected to {string}")]
fn then_redirected(world: &mut RbacWorld, target: String) {
    let decision = world.last_decision.as_ref().expect("No route was opened");
    assert_eq!(decision.redirect_target(), Some(target.as_str()), "decision was {:?}", decision);
}

// ==================== NAVIGATION ====================

#[then(expr = "the sidebar lists {string}")]
fn then_sidebar_lists(world: &mut RbacWorld, items: String) {
    let navigation = Navigation::dashboard();
    let titles: Vec<&str> =
        world.session.visible_navigation(&navigation).iter().map(|item| item.title.as_str()).collect();
    let expected: Vec<&str> = items.split(',').map(str::trim).collect();
    assert_eq!(titles, expected);
}
