//! Load-state helpers shared by the list pages.

#[cfg(test)]
#[path = "listing_test.rs"]
mod listing_test;

use crate::net::error::ApiError;

pub(crate) const SESSION_EXPIRED: &str = "Your session has expired. Sign in again.";

/// Progress of a one-shot list fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Load<T> {
    Pending,
    Ready(Vec<T>),
    Failed(String),
}

impl<T> Load<T> {
    pub(crate) fn from_result(result: Result<Vec<T>, ApiError>, what: &str) -> Self {
        match result {
            Ok(items) => Self::Ready(items),
            Err(err) => {
                log::warn!("loading {what} failed: {err}");
                Self::Failed(load_error_message(&err, what))
            }
        }
    }
}

/// UI message for a failed list fetch.
pub(crate) fn load_error_message(err: &ApiError, what: &str) -> String {
    match err.status() {
        Some(401 | 403) => SESSION_EXPIRED.to_owned(),
        _ => format!("Could not load {what}."),
    }
}
