//! Scripted transport shared by network and store tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::error::ApiError;
use super::http::{HttpResponse, HttpTransport, RequestConfig};

#[derive(Clone, Debug, PartialEq)]
pub struct RecordedRequest {
    pub method: &'static str,
    pub url: String,
    pub body: Option<serde_json::Value>,
    pub config: RequestConfig,
}

/// Replays queued results in order and records every request it sees.
#[derive(Default)]
pub struct MockTransport {
    responses: RefCell<VecDeque<Result<HttpResponse, ApiError>>>,
    requests: RefCell<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn new(responses: Vec<Result<HttpResponse, ApiError>>) -> Self {
        Self { responses: RefCell::new(responses.into()), requests: RefCell::default() }
    }

    /// Transport that answers the next request with `status` and `body`.
    pub fn respond(status: u16, body: serde_json::Value) -> Self {
        Self::new(vec![Ok(HttpResponse { status, body })])
    }

    pub fn failing(err: ApiError) -> Self {
        Self::new(vec![Err(err)])
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.borrow().clone()
    }

    fn next(&self, request: RecordedRequest) -> Result<HttpResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.responses
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ApiError::Network("no scripted response".to_owned())))
    }
}

#[async_trait::async_trait(?Send)]
impl HttpTransport for MockTransport {
    async fn get(&self, url: &str, config: &RequestConfig) -> Result<HttpResponse, ApiError> {
        self.next(RecordedRequest { method: "GET", url: url.to_owned(), body: None, config: config.clone() })
    }

    async fn post(
        &self,
        url: &str,
        body: &serde_json::Value,
        config: &RequestConfig,
    ) -> Result<HttpResponse, ApiError> {
        self.next(RecordedRequest {
            method: "POST",
            url: url.to_owned(),
            body: Some(body.clone()),
            config: config.clone(),
        })
    }
}
