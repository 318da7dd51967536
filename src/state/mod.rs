//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! `auth` is plain session data with synchronous transitions. `store` wraps
//! it with the network and persistence side effects, and `cell` lets the same
//! store drive either a Leptos signal or a plain `RefCell`.

pub mod auth;
pub mod cell;
pub mod store;
