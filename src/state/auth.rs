//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the route guard and identity-aware pages; mutated only through the
//! transitions below, which [`crate::state::store::AuthStore`] drives.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::http::RequestConfig;
use crate::net::types::{LoginResponse, Role, User};

/// Current session plus the status of the last login/register call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    pub token: Option<String>,
    pub user: Option<User>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    /// Session restored from a persisted token. No identity is attached.
    pub fn with_token(token: Option<String>) -> Self {
        Self { token, ..Self::default() }
    }

    /// Both a token and an identity are held.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn is_client(&self) -> bool {
        self.role() == Some(Role::Client)
    }

    pub fn is_freelancer(&self) -> bool {
        self.role() == Some(Role::Freelancer)
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }

    /// Per-request config carrying the token, when one is held.
    pub fn request_config(&self) -> RequestConfig {
        self.token
            .as_deref()
            .map_or_else(RequestConfig::anonymous, RequestConfig::with_token)
    }

    /// Enter a login/register call.
    pub fn begin_request(&mut self) {
        self.loading = true;
        self.error = None;
    }

    /// Apply a successful login.
    pub fn complete_login(&mut self, resp: &LoginResponse) {
        self.token = Some(resp.token.clone());
        self.user = Some(resp.user());
        self.loading = false;
    }

    /// Leave a login/register call without touching the session.
    pub fn finish_request(&mut self) {
        self.loading = false;
    }

    /// Record a failed call. Token and user are left as they were.
    pub fn fail_request(&mut self, message: String) {
        self.error = Some(message);
        self.loading = false;
    }

    /// Drop identity and token.
    pub fn clear(&mut self) {
        self.user = None;
        self.token = None;
    }
}
