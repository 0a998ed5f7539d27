//! Route guard: the single access decision for access-controlled views.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every protected route applies the same decision table, so the decision is
//! one pure function returning a sum type instead of per-view conditionals.
//! The guard only hides and redirects UI; real enforcement is the server's
//! job on every request.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::notice::NoticeState;
use crate::state::session::{SessionState, SessionStatus};

/// Where denied visitors are sent to authenticate.
pub const LOGIN_PATH: &str = "/login";
/// Where authenticated non-admins are sent when they hit admin-only views.
pub const USER_HOME_PATH: &str = "/dashboard";
/// Admin landing view.
pub const ADMIN_HOME_PATH: &str = "/admin/dashboard";

/// Access level a view declares for itself.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RouteRequirement {
    #[default]
    Public,
    RequiresAuth,
    RequiresAdmin,
}

/// Terminal outcome of a guard decision.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Allow,
    Redirect(&'static str),
}

/// Decide access for a view. Returns `None` while the session is still
/// resolving — the view renders a neutral loading state and never flashes
/// protected content. Once resolved, exactly one terminal outcome applies:
///
/// | requirement   | Anonymous        | User                 | Admin |
/// |---------------|------------------|----------------------|-------|
/// | Public        | Allow            | Allow                | Allow |
/// | RequiresAuth  | Redirect(login)  | Allow                | Allow |
/// | RequiresAdmin | Redirect(login)  | Redirect(user home)  | Allow |
pub fn authorize(requirement: RouteRequirement, status: SessionStatus) -> Option<Access> {
    if !status.is_resolved() {
        return None;
    }
    Some(match requirement {
        RouteRequirement::Public => Access::Allow,
        RouteRequirement::RequiresAuth => {
            if status.is_authenticated() {
                Access::Allow
            } else {
                Access::Redirect(LOGIN_PATH)
            }
        }
        RouteRequirement::RequiresAdmin => match status {
            SessionStatus::Admin => Access::Allow,
            SessionStatus::User => Access::Redirect(USER_HOME_PATH),
            _ => Access::Redirect(LOGIN_PATH),
        },
    })
}

/// Client views where an unauthenticated visitor legitimately belongs. A 401
/// observed while one of these is current never triggers another redirect.
pub fn is_public_auth_view(path: &str) -> bool {
    matches!(path, "/login" | "/signin" | "/signup" | "/auth/callback")
}

/// Landing view for a freshly resolved session.
pub fn home_for(status: SessionStatus) -> &'static str {
    match status {
        SessionStatus::Admin => ADMIN_HOME_PATH,
        SessionStatus::User => USER_HOME_PATH,
        _ => LOGIN_PATH,
    }
}

/// Install the guard's redirect reaction for the current view. Re-evaluates
/// as the session resolves; a denied admin-only access while signed in as a
/// plain user additionally emits a one-time notice for this mount.
pub fn install_access_redirect<F>(
    requirement: RouteRequirement,
    session: RwSignal<SessionState>,
    notices: RwSignal<NoticeState>,
    navigate: F,
) where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let mut denied_notified = false;
    Effect::new(move || {
        let status = session.get().status;
        if let Some(Access::Redirect(target)) = authorize(requirement, status) {
            if requirement == RouteRequirement::RequiresAdmin
                && status == SessionStatus::User
                && !denied_notified
            {
                denied_notified = true;
                let _ = notices.try_update(|queue| {
                    queue.error("You do not have permission to access this page");
                });
            }
            navigate(target, NavigateOptions::default());
        }
    });
}

/// Whether a view gated by `requirement` may render its content right now.
pub fn allows(requirement: RouteRequirement, status: SessionStatus) -> bool {
    matches!(authorize(requirement, status), Some(Access::Allow))
}
