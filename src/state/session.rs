//! Session model: the resolved role of the current visitor.
//!
//! DESIGN
//! ======
//! A small state machine, `Booting -> {Anonymous, User, Admin}`, recomputed
//! from token presence plus one `GET /api/auth/status` round trip. The role
//! is derived, never stored: client memory is a rendering hint, and the
//! server re-checks every privileged request. Resolution is fail-closed —
//! any ambiguity lands on `Anonymous`.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api::ApiClient;
use crate::net::types::{AuthStatus, ProfileResponse};
use crate::util::token_store::CredentialStore;

/// Resolved role of the current visitor.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionStatus {
    /// Resolution in flight; views show a neutral loading state.
    #[default]
    Booting,
    Anonymous,
    User,
    Admin,
}

impl SessionStatus {
    /// Whether resolution has reached a terminal state.
    pub fn is_resolved(self) -> bool {
        self != Self::Booting
    }

    /// Whether the visitor holds a valid session.
    pub fn is_authenticated(self) -> bool {
        matches!(self, Self::User | Self::Admin)
    }

    /// Whether the visitor holds admin rights.
    pub fn is_admin(self) -> bool {
        self == Self::Admin
    }
}

/// Display data fetched after authentication resolves. Optional: a fetch
/// failure leaves it unset without downgrading the role.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Profile {
    pub full_name: String,
    pub email: Option<String>,
    pub avatar_img: Option<String>,
}

impl From<ProfileResponse> for Profile {
    fn from(response: ProfileResponse) -> Self {
        Self {
            full_name: response.full_name,
            email: response.email,
            avatar_img: response.avatar_img,
        }
    }
}

/// Session state shared through context. Starts at `Booting` until the first
/// resolution completes.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub status: SessionStatus,
    pub profile: Option<Profile>,
}

/// Apply an auth-status verdict to the credential store and derive the
/// resulting role. A token the server no longer recognizes is purged here,
/// so no stale-authenticated state survives a negative check.
pub fn settle(store: &CredentialStore, checked: AuthStatus) -> SessionStatus {
    if store.get().is_none() {
        return SessionStatus::Anonymous;
    }
    if !checked.authenticated {
        store.clear();
        return SessionStatus::Anonymous;
    }
    if checked.is_admin {
        SessionStatus::Admin
    } else {
        SessionStatus::User
    }
}

/// Entry logic of the state machine: resolve the role from the credential
/// store and the remote auth check, then opportunistically fetch the
/// role-appropriate profile. Runs at boot, after login, and whenever another
/// tab changes the token. All signal writes use the non-panicking setters so
/// a stale completion after teardown is a no-op.
pub async fn load(api: ApiClient, session: RwSignal<SessionState>) {
    if api.store.get().is_none() {
        let _ = session.try_set(SessionState {
            status: SessionStatus::Anonymous,
            profile: None,
        });
        return;
    }

    let _ = session.try_update(|state| state.status = SessionStatus::Booting);
    let checked = api.auth_status().await;
    let status = settle(&api.store, checked);
    if !status.is_authenticated() {
        let _ = session.try_set(SessionState {
            status: SessionStatus::Anonymous,
            profile: None,
        });
        return;
    }
    if session.try_update(|state| state.status = status).is_none() {
        return;
    }

    let fetched = if status.is_admin() {
        api.admin_profile().await
    } else {
        api.user_profile().await
    };
    match fetched {
        Ok(profile) => {
            // Server-directed navigation is honored before the data renders.
            if let Some(target) = profile.redirect.clone() {
                api.nav.redirect_to(&target);
            }
            let _ = session.try_update(|state| state.profile = Some(Profile::from(profile)));
        }
        Err(error) => {
            log::warn!("profile fetch failed, keeping role without display data: {error}");
            let _ = session.try_update(|state| state.profile = None);
        }
    }
}

/// Purge the credential and produce the anonymous session state. The core of
/// `sign_out`, split out so the transition is testable without a reactive
/// runtime.
pub fn signed_out(store: &CredentialStore) -> SessionState {
    store.clear();
    SessionState {
        status: SessionStatus::Anonymous,
        profile: None,
    }
}

/// Synchronous transition to `Anonymous` from any state: purge the
/// credential and drop the profile, independent of any network outcome.
pub fn sign_out(store: &CredentialStore, session: RwSignal<SessionState>) {
    let _ = session.try_set(signed_out(store));
}
