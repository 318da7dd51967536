//! HTTP transport seam for REST calls.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ApiClient` talks to the server only through [`HttpTransport`]. The browser
//! build uses `gloo-net`; tests script responses with an in-memory mock.
//!
//! DESIGN
//! ======
//! Authorization travels in a [`RequestConfig`] passed to every call. There
//! is no client-wide default header to set or forget to clear.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "http_test.rs"]
mod http_test;

use super::error::ApiError;

pub const AUTHORIZATION: &str = "Authorization";

/// Per-request headers attached to an outgoing call.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RequestConfig {
    headers: Vec<(String, String)>,
}

impl RequestConfig {
    /// Config for an unauthenticated request.
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Config carrying `Authorization: Token <token>`.
    pub fn with_token(token: &str) -> Self {
        Self { headers: vec![(AUTHORIZATION.to_owned(), format!("Token {token}"))] }
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn authorization(&self) -> Option<&str> {
        self.headers
            .iter()
            .find(|(name, _)| name == AUTHORIZATION)
            .map(|(_, value)| value.as_str())
    }
}

/// Status and JSON body of a completed request.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    /// `Value::Null` when the body was empty or not JSON.
    pub body: serde_json::Value,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Minimal JSON-over-HTTP client used by [`crate::net::api::ApiClient`].
#[async_trait::async_trait(?Send)]
pub trait HttpTransport {
    /// Send a `GET` request.
    ///
    /// # Errors
    ///
    /// Returns an [`ApiError`] only when no response was received. Non-success
    /// statuses come back as `Ok`.
    async fn get(&self, url: &str, config: &RequestConfig) -> Result<HttpResponse, ApiError>;

    /// Send a `POST` request with a JSON body.
    ///
    /// # Errors
    ///
    /// Same contract as [`HttpTransport::get`].
    async fn post(
        &self,
        url: &str,
        body: &serde_json::Value,
        config: &RequestConfig,
    ) -> Result<HttpResponse, ApiError>;
}

/// `fetch`-backed transport. Outside the `csr` build every call returns
/// [`ApiError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

#[cfg(feature = "csr")]
fn apply_headers(mut builder: gloo_net::http::RequestBuilder, config: &RequestConfig) -> gloo_net::http::RequestBuilder {
    for (name, value) in config.headers() {
        builder = builder.header(name, value);
    }
    builder
}

#[cfg(feature = "csr")]
async fn read_response(resp: gloo_net::http::Response) -> HttpResponse {
    let status = resp.status();
    let body = resp
        .text()
        .await
        .ok()
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or(serde_json::Value::Null);
    HttpResponse { status, body }
}

#[async_trait::async_trait(?Send)]
impl HttpTransport for BrowserTransport {
    async fn get(&self, url: &str, config: &RequestConfig) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = apply_headers(gloo_net::http::Request::get(url), config)
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(read_response(resp).await)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, config);
            Err(ApiError::Unavailable)
        }
    }

    async fn post(
        &self,
        url: &str,
        body: &serde_json::Value,
        config: &RequestConfig,
    ) -> Result<HttpResponse, ApiError> {
        #[cfg(feature = "csr")]
        {
            let resp = apply_headers(gloo_net::http::Request::post(url), config)
                .json(body)
                .map_err(|e| ApiError::Network(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Network(e.to_string()))?;
            Ok(read_response(resp).await)
        }
        #[cfg(not(feature = "csr"))]
        {
            let _ = (url, body, config);
            Err(ApiError::Unavailable)
        }
    }
}
