//! Session state value

use super::UserProfile;
use crate::rbac::Role;
use serde::{Deserialize, Serialize};

/// Coarse lifecycle phase derived from a [`SessionState`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Loading,
    Authenticated(Role),
    Unauthenticated,
}

/// The single current-user record
///
/// Always replaced as a whole, so a reader sees either the old or the new
/// value and never a mix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionState {
    pub user: Option<UserProfile>,
    pub is_authenticated: bool,
    pub is_loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::loading()
    }
}

impl SessionState {
    /// Initial state before the first restore/login resolves
    pub fn loading() -> Self {
        Self { user: None, is_authenticated: false, is_loading: true }
    }

    pub fn unauthenticated() -> Self {
        Self { user: None, is_authenticated: false, is_loading: false }
    }

    pub fn authenticated(user: UserProfile) -> Self {
        Self { user: Some(user), is_authenticated: true, is_loading: false }
    }

    /// Role of the current user, if any
    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    pub fn phase(&self) -> SessionPhase {
        if self.is_loading {
            return SessionPhase::Loading;
        }
        match self.role() {
            Some(role) if self.is_authenticated => SessionPhase::Authenticated(role),
            _ => SessionPhase::Unauthenticated,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::demo_user;

    #[test]
    fn test_phases() {
        assert_eq!(SessionState::default().phase(), SessionPhase::Loading);
        assert_eq!(SessionState::unauthenticated().phase(), SessionPhase::Unauthenticated);
        assert_eq!(
            SessionState::authenticated(demo_user(Role::Editor)).phase(),
            SessionPhase::Authenticated(Role::Editor)
        );
    }

    #[test]
    fn test_loading_keeps_prior_user() {
        let mut state = SessionState::authenticated(demo_user(Role::Admin));
        state.is_loading = true;

        assert_eq!(state.phase(), SessionPhase::Loading);
        assert_eq!(state.role(), Some(Role::Admin));
    }

    #[test]
    fn test_unauthenticated_has_no_role() {
        assert_eq!(SessionState::unauthenticated().role(), None);
        assert_eq!(SessionState::loading().role(), None);
    }
}
