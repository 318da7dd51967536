//! REST API client for the marketplace server.
//!
//! ERROR HANDLING
//! ==============
//! Non-success responses become [`ApiError::Rejected`] with the body intact.
//! The `*_error_message` helpers turn those bodies into the single string the
//! UI shows, following the server's field-error layout (`{"field": ["msg"]}`).

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::de::DeserializeOwned;

use super::error::ApiError;
use super::http::{HttpResponse, HttpTransport, RequestConfig};
use super::types::{Bid, LoginCredentials, LoginResponse, NewBid, NewProject, Project, ProjectQuery, RegisterData};

pub const LOGIN_FAILED: &str = "Login failed";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const PROJECT_FAILED: &str = "Could not post project";
pub const BID_FAILED: &str = "Could not submit bid";

/// Fields checked, in order, for a registration error message.
const REGISTER_ERROR_FIELDS: [&str; 3] = ["username", "email", "password"];
const PROJECT_ERROR_FIELDS: [&str; 4] = ["title", "description", "budget", "non_field_errors"];
const BID_ERROR_FIELDS: [&str; 4] = ["project", "amount", "cover_letter", "non_field_errors"];

/// First non-empty message in the `field` error list of a response body.
fn first_field_error(body: &serde_json::Value, field: &str) -> Option<String> {
    body.get(field)?
        .as_array()?
        .first()?
        .as_str()
        .filter(|msg| !msg.is_empty())
        .map(str::to_owned)
}

/// Non-empty `detail` string, as sent with permission and auth failures.
fn detail_message(body: &serde_json::Value) -> Option<String> {
    body.get("detail")?.as_str().filter(|msg| !msg.is_empty()).map(str::to_owned)
}

fn first_error(err: &ApiError, fields: &[&str], fallback: &str) -> String {
    err.body()
        .and_then(|body| fields.iter().find_map(|field| first_field_error(body, field)))
        .unwrap_or_else(|| fallback.to_owned())
}

/// Field errors first, then `detail`, then a role refusal made client-side.
fn write_error(err: &ApiError, fields: &[&str], fallback: &str) -> String {
    if let ApiError::NotPermitted(msg) = err {
        return (*msg).to_owned();
    }
    err.body()
        .and_then(|body| {
            fields
                .iter()
                .find_map(|field| first_field_error(body, field))
                .or_else(|| detail_message(body))
        })
        .unwrap_or_else(|| fallback.to_owned())
}

/// UI message for a failed login.
pub fn login_error_message(err: &ApiError) -> String {
    first_error(err, &["non_field_errors"], LOGIN_FAILED)
}

/// UI message for a failed registration.
pub fn register_error_message(err: &ApiError) -> String {
    first_error(err, &REGISTER_ERROR_FIELDS, REGISTRATION_FAILED)
}

/// UI message for a failed project post.
pub fn project_error_message(err: &ApiError) -> String {
    write_error(err, &PROJECT_ERROR_FIELDS, PROJECT_FAILED)
}

/// UI message for a failed bid. A repeat bid on the same project comes back
/// as a `non_field_errors` uniqueness message.
pub fn bid_error_message(err: &ApiError) -> String {
    write_error(err, &BID_ERROR_FIELDS, BID_FAILED)
}

fn decode<T: DeserializeOwned>(resp: HttpResponse) -> Result<T, ApiError> {
    if !resp.is_success() {
        return Err(ApiError::Rejected { status: resp.status, body: resp.body });
    }
    serde_json::from_value(resp.body).map_err(|e| ApiError::Decode(e.to_string()))
}

fn encode<T: serde::Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}

/// Typed client for the `/api/` endpoints.
#[derive(Clone, Debug)]
pub struct ApiClient<T> {
    transport: T,
    base_url: String,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(transport: T, base_url: &str) -> Self {
        Self { transport, base_url: base_url.trim_end_matches('/').to_owned() }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Absolute URL for an API path such as `login/`.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// Exchange credentials for a token via `POST /api/login/`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] for bad credentials, or a transport error.
    pub async fn login(&self, credentials: &LoginCredentials) -> Result<LoginResponse, ApiError> {
        let body = encode(credentials)?;
        let resp = self
            .transport
            .post(&self.endpoint("login/"), &body, &RequestConfig::anonymous())
            .await?;
        decode(resp)
    }

    /// Create an account via `POST /api/register/`, returning the raw body.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with per-field errors, or a transport error.
    pub async fn register(&self, data: &RegisterData) -> Result<serde_json::Value, ApiError> {
        let body = encode(data)?;
        let resp = self
            .transport
            .post(&self.endpoint("register/"), &body, &RequestConfig::anonymous())
            .await?;
        decode(resp)
    }

    /// List projects via `GET /api/projects/`, filtered by `query`.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on rejection, transport failure or schema mismatch.
    pub async fn list_projects(&self, query: &ProjectQuery, config: &RequestConfig) -> Result<Vec<Project>, ApiError> {
        let url = format!("{}{}", self.endpoint("projects/"), query.to_query_string());
        let resp = self.transport.get(&url, config).await?;
        decode(resp)
    }

    /// Post a project via `POST /api/projects/`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with per-field errors, or a transport error.
    pub async fn create_project(&self, project: &NewProject, config: &RequestConfig) -> Result<Project, ApiError> {
        let body = encode(project)?;
        let resp = self.transport.post(&self.endpoint("projects/"), &body, config).await?;
        decode(resp)
    }

    /// List bids via `GET /api/bids/`: a freelancer's own bids, or the bids
    /// on a client's projects.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] on rejection, transport failure or schema mismatch.
    pub async fn list_bids(&self, config: &RequestConfig) -> Result<Vec<Bid>, ApiError> {
        let resp = self.transport.get(&self.endpoint("bids/"), config).await?;
        decode(resp)
    }

    /// Submit a bid via `POST /api/bids/`.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Rejected`] with per-field errors (including a
    /// repeat bid on the same project), or a transport error.
    pub async fn create_bid(&self, bid: &NewBid, config: &RequestConfig) -> Result<Bid, ApiError> {
        let body = encode(bid)?;
        let resp = self.transport.post(&self.endpoint("bids/"), &body, config).await?;
        decode(resp)
    }
}
