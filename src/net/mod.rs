//! Networking modules for the marketplace REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns endpoint calls and error-message extraction, `http` is the
//! transport seam, and `types` defines the wire schema.

pub mod api;
pub mod error;
pub mod http;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
