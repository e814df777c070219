//! Read-only views of the access model

use vaultflow_core::rbac::{
    can_access_route, display_name, has_permission, has_permission_token, Navigation, Permission,
    Role,
};

pub fn roles() -> String {
    Role::ALL
        .iter()
        .map(|role| format!("{:<8} {:<20} level {}", role.as_str(), display_name(*role), role.level()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn permissions(role: Option<Role>) -> String {
    Permission::ALL
        .iter()
        .filter(|permission| role.map_or(true, |role| has_permission(role, **permission)))
        .map(|permission| format!("{:<18} {}", permission.identifier(), permission.description()))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn check(role: Role, permission: &str) -> String {
    let verdict = if has_permission_token(role, permission) { "granted" } else { "denied" };
    format!("{} {} {}", role, verdict, permission)
}

pub fn route(role: Role, allowed: &[Role]) -> String {
    let allowed = if allowed.is_empty() { None } else { Some(allowed) };
    let verdict = if can_access_route(role, allowed) { "allowed" } else { "denied" };
    format!("{} {}", role, verdict)
}

pub fn nav(role: Option<Role>) -> String {
    let navigation = Navigation::dashboard();
    let items = match role {
        Some(role) => navigation.visible_to(role),
        None => navigation.items().iter().collect(),
    };

    items
        .iter()
        .map(|item| {
            if item.allowed_roles.is_empty() || role.is_some() {
                format!("{:<10} {}", item.title, item.target)
            } else {
                let roles: Vec<&str> = item.allowed_roles.iter().map(|r| r.as_str()).collect();
                format!("{:<10} {} [{}]", item.title, item.target, roles.join(", "))
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
