//! Access gates
//!
//! Gates project authorization answers onto render and navigation decisions.
//! They are framework agnostic: instead of rendering anything they hand back a
//! tagged value the UI layer interprets.
//!
//! - [`PermissionGate`] - element-level, keyed on a permission token
//! - [`RoleGate`] - element-level, keyed on a role list
//! - [`RouteGate`] - page-level, decides between render and redirect

use super::{can_access_route, Permission, PermissionCatalog, Role};
use crate::config::AuthConfig;
use crate::session::{SessionPhase, SessionState};

/// Outcome of an element-level gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GateDecision<T> {
    /// Render the protected content
    Allow(T),
    /// Render the fallback
    Deny(T),
}

impl<T> GateDecision<T> {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GateDecision::Allow(_))
    }

    /// Whichever branch was selected
    pub fn into_inner(self) -> T {
        match self {
            GateDecision::Allow(content) | GateDecision::Deny(content) => content,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> GateDecision<U> {
        match self {
            GateDecision::Allow(content) => GateDecision::Allow(f(content)),
            GateDecision::Deny(content) => GateDecision::Deny(f(content)),
        }
    }
}

fn decide<T>(allowed: bool, content: T, fallback: T) -> GateDecision<T> {
    if allowed {
        GateDecision::Allow(content)
    } else {
        GateDecision::Deny(fallback)
    }
}

/// Gate keyed on a single permission token
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionGate {
    required: Option<Permission>,
    token: String,
}

impl PermissionGate {
    pub fn new(permission: Permission) -> Self {
        Self { required: Some(permission), token: permission.identifier().to_string() }
    }

    /// Gate on an untyped token; an unknown token denies every session
    pub fn from_token(token: impl Into<String>) -> Self {
        let token = token.into();
        Self { required: Permission::from_identifier(&token), token }
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn permits(&self, catalog: &PermissionCatalog, session: &SessionState) -> bool {
        match (session.role(), self.required) {
            (Some(role), Some(permission)) => catalog.has_permission(role, permission),
            _ => false,
        }
    }

    pub fn evaluate<T>(
        &self,
        catalog: &PermissionCatalog,
        session: &SessionState,
        content: T,
        fallback: T,
    ) -> GateDecision<T> {
        let allowed = self.permits(catalog, session);
        if !allowed {
            log::debug!("Permission gate '{}' denied for {:?}", self.token, session.role());
        }
        decide(allowed, content, fallback)
    }

    /// Like [`evaluate`](Self::evaluate) with an empty fallback
    pub fn evaluate_or_hide<T>(
        &self,
        catalog: &PermissionCatalog,
        session: &SessionState,
        content: T,
    ) -> GateDecision<Option<T>> {
        self.evaluate(catalog, session, Some(content), None)
    }
}

/// Gate keyed on role membership
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleGate {
    allowed_roles: Vec<Role>,
}

impl RoleGate {
    pub fn new(allowed_roles: impl Into<Vec<Role>>) -> Self {
        Self { allowed_roles: allowed_roles.into() }
    }

    pub fn permits(&self, session: &SessionState) -> bool {
        session.role().is_some_and(|role| can_access_route(role, Some(self.allowed_roles.as_slice())))
    }

    pub fn evaluate<T>(&self, session: &SessionState, content: T, fallback: T) -> GateDecision<T> {
        decide(self.permits(session), content, fallback)
    }

    pub fn evaluate_or_hide<T>(&self, session: &SessionState, content: T) -> GateDecision<Option<T>> {
        self.evaluate(session, Some(content), None)
    }
}

/// Why a route gate redirected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectReason {
    /// No session: sent to the gate's fallback destination
    Unauthenticated,
    /// Session present but role not allowed: sent to the landing page
    InsufficientRole,
}

/// Outcome of a page-level gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Session still resolving; show a placeholder
    Pending,
    Render,
    Redirect { target: String, reason: RedirectReason },
}

impl RouteDecision {
    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            RouteDecision::Redirect { target, .. } => Some(target.as_str()),
            _ => None,
        }
    }
}

pub const DEFAULT_FALLBACK_ROUTE: &str = "/";
pub const DEFAULT_LANDING_ROUTE: &str = "/dashboard";

/// Page-level gate
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteGate {
    allowed_roles: Option<Vec<Role>>,
    fallback: String,
    landing: String,
}

impl Default for RouteGate {
    fn default() -> Self {
        Self {
            allowed_roles: None,
            fallback: DEFAULT_FALLBACK_ROUTE.to_string(),
            landing: DEFAULT_LANDING_ROUTE.to_string(),
        }
    }
}

impl RouteGate {
    /// Gate open to any authenticated session
    pub fn new() -> Self {
        Self::default()
    }

    /// Gate using the configured fallback and landing routes
    pub fn from_config(config: &AuthConfig) -> Self {
        Self {
            allowed_roles: None,
            fallback: config.fallback_route.clone(),
            landing: config.landing_route.clone(),
        }
    }

    pub fn with_allowed_roles(mut self, roles: impl Into<Vec<Role>>) -> Self {
        self.allowed_roles = Some(roles.into());
        self
    }

    /// Destination for unauthenticated sessions
    pub fn with_fallback(mut self, fallback: impl Into<String>) -> Self {
        self.fallback = fallback.into();
        self
    }

    /// Destination for authenticated sessions lacking the role
    pub fn with_landing(mut self, landing: impl Into<String>) -> Self {
        self.landing = landing.into();
        self
    }

    pub fn decide(&self, session: &SessionState) -> RouteDecision {
        let role = match session.phase() {
            SessionPhase::Loading => return RouteDecision::Pending,
            SessionPhase::Unauthenticated => {
                return RouteDecision::Redirect {
                    target: self.fallback.clone(),
                    reason: RedirectReason::Unauthenticated,
                }
            }
            SessionPhase::Authenticated(role) => role,
        };

        if can_access_route(role, self.allowed_roles.as_deref()) {
            RouteDecision::Render
        } else {
            log::debug!("Route gate redirecting role {} to {}", role, self.landing);
            RouteDecision::Redirect {
                target: self.landing.clone(),
                reason: RedirectReason::InsufficientRole,
            }
        }
    }
}
