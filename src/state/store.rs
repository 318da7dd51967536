//! Session store: login, registration and logout with their side effects.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pages call into [`AuthStore`]; the route guard only reads the resulting
//! [`AuthState`]. The persisted token is written on login and removed on
//! logout, and is the only session data that survives a reload.
//!
//! ERROR HANDLING
//! ==============
//! Failed calls record a display message in `AuthState::error` and then hand
//! the same [`ApiError`] back so the caller can react as well.

#[cfg(test)]
#[path = "store_test.rs"]
mod store_test;

use crate::config::RestorePolicy;
use crate::net::api::{ApiClient, login_error_message, register_error_message};
use crate::net::error::ApiError;
use crate::net::http::HttpTransport;
use crate::net::types::{Bid, LoginCredentials, NewBid, NewProject, Project, ProjectQuery, RegisterData};
use crate::state::auth::AuthState;
use crate::state::cell::StateCell;
use crate::util::token_storage::TokenStorage;

pub const ONLY_CLIENTS_POST: &str = "Only clients can post projects.";
pub const ONLY_FREELANCERS_BID: &str = "Only freelancers can create bids.";

/// Initial session for a cold start, per `policy`.
pub fn restore_session(storage: &impl TokenStorage, policy: RestorePolicy) -> AuthState {
    match (storage.load(), policy) {
        (Some(_), RestorePolicy::DiscardToken) => {
            log::info!("discarding persisted token without identity");
            storage.clear();
            AuthState::default()
        }
        (token, _) => {
            if token.is_some() {
                log::debug!("restored persisted token; identity requires login");
            }
            AuthState::with_token(token)
        }
    }
}

#[derive(Clone, Debug)]
pub struct AuthStore<T, S, C> {
    api: ApiClient<T>,
    storage: S,
    state: C,
}

impl<T, S, C> AuthStore<T, S, C>
where
    T: HttpTransport,
    S: TokenStorage,
    C: StateCell<AuthState>,
{
    pub fn new(api: ApiClient<T>, storage: S, state: C) -> Self {
        Self { api, storage, state }
    }

    pub fn api(&self) -> &ApiClient<T> {
        &self.api
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn state(&self) -> &C {
        &self.state
    }

    pub fn snapshot(&self) -> AuthState {
        self.state.read_state(AuthState::clone)
    }

    pub fn is_authenticated(&self) -> bool {
        self.state.read_state(AuthState::is_authenticated)
    }

    /// Sign in and persist the returned token.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] from the login call after recording its
    /// display message in the session.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<(), ApiError> {
        self.state.write_state(AuthState::begin_request);
        match self.api.login(credentials).await {
            Ok(resp) => {
                self.storage.save(&resp.token);
                self.state.write_state(|s| s.complete_login(&resp));
                log::info!("signed in as {} ({})", resp.username, resp.role.as_str());
                Ok(())
            }
            Err(err) => {
                log::warn!("login failed: {err}");
                let message = login_error_message(&err);
                self.state.write_state(|s| s.fail_request(message));
                Err(err)
            }
        }
    }

    /// Create an account. The session is not signed in by this call.
    ///
    /// # Errors
    ///
    /// Returns the [`ApiError`] from the register call after recording its
    /// display message in the session.
    pub async fn register(&self, data: &RegisterData) -> Result<serde_json::Value, ApiError> {
        self.state.write_state(AuthState::begin_request);
        match self.api.register(data).await {
            Ok(body) => {
                self.state.write_state(AuthState::finish_request);
                log::info!("registered {} as {}", data.username, data.role.as_str());
                Ok(body)
            }
            Err(err) => {
                log::warn!("registration failed: {err}");
                let message = register_error_message(&err);
                self.state.write_state(|s| s.fail_request(message));
                Err(err)
            }
        }
    }

    /// Drop the session and the persisted token.
    pub fn logout(&self) {
        self.state.write_state(AuthState::clear);
        self.storage.clear();
        log::info!("signed out");
    }

    /// Whether a token is held. The token is not checked with the server.
    pub fn check_auth(&self) -> bool {
        self.state.read_state(|s| s.token.is_some())
    }

    /// Projects visible to the session, filtered by `query`.
    ///
    /// # Errors
    ///
    /// Propagates the [`ApiError`] from the listing call.
    pub async fn projects(&self, query: &ProjectQuery) -> Result<Vec<Project>, ApiError> {
        let config = self.state.read_state(AuthState::request_config);
        self.api.list_projects(query, &config).await
    }

    /// Bids the session can see: its own bids as a freelancer, or the bids
    /// on its projects as a client.
    ///
    /// # Errors
    ///
    /// Propagates the [`ApiError`] from the listing call.
    pub async fn my_bids(&self) -> Result<Vec<Bid>, ApiError> {
        let config = self.state.read_state(AuthState::request_config);
        self.api.list_bids(&config).await
    }

    /// Post a project owned by the signed-in client.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotPermitted`] without a request unless the
    /// session is a client, otherwise the [`ApiError`] from the call.
    pub async fn post_project(&self, project: &NewProject) -> Result<Project, ApiError> {
        let (allowed, config) = self.state.read_state(|s| (s.is_client(), s.request_config()));
        if !allowed {
            return Err(ApiError::NotPermitted(ONLY_CLIENTS_POST));
        }
        let created = self.api.create_project(project, &config).await?;
        log::info!("posted project {} ({})", created.id, created.title);
        Ok(created)
    }

    /// Submit a bid as the signed-in freelancer. One bid per project is
    /// enforced by the server.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::NotPermitted`] without a request unless the
    /// session is a freelancer, otherwise the [`ApiError`] from the call.
    pub async fn place_bid(&self, bid: &NewBid) -> Result<Bid, ApiError> {
        let (allowed, config) = self.state.read_state(|s| (s.is_freelancer(), s.request_config()));
        if !allowed {
            return Err(ApiError::NotPermitted(ONLY_FREELANCERS_BID));
        }
        let placed = self.api.create_bid(bid, &config).await?;
        log::info!("placed bid {} on project {}", placed.id, bid.project);
        Ok(placed)
    }
}
