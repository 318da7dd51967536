//! Navigation guard shared by every route.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`evaluate`] is the pure decision; [`install_route_guard`] re-runs it
//! whenever the session changes so pages never render for the wrong audience.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::routes::{Access, HOME_PATH, LOGIN_PATH};
use crate::state::auth::AuthState;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Allow,
    RedirectToLogin,
    RedirectToHome,
}

impl GuardDecision {
    pub fn redirect_path(self) -> Option<&'static str> {
        match self {
            Self::Allow => None,
            Self::RedirectToLogin => Some(LOGIN_PATH),
            Self::RedirectToHome => Some(HOME_PATH),
        }
    }
}

/// Decide a navigation from the target's access requirement and session.
/// Auth requirements are checked before guest requirements.
pub fn evaluate(access: Access, authenticated: bool) -> GuardDecision {
    match access {
        Access::RequiresAuth if !authenticated => GuardDecision::RedirectToLogin,
        Access::RequiresGuest if authenticated => GuardDecision::RedirectToHome,
        _ => GuardDecision::Allow,
    }
}

/// Redirect away from the current route whenever the session stops
/// satisfying `access`.
pub fn install_route_guard<F>(auth: RwSignal<AuthState>, access: Access, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let authenticated = auth.with(AuthState::is_authenticated);
        if let Some(target) = evaluate(access, authenticated).redirect_path() {
            log::debug!("route guard redirecting to {target}");
            navigate(target, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
