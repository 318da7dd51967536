//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its route-scoped orchestration. Access control is applied
//! around pages by the app shell, never inside them.

pub(crate) mod forms;
pub mod home;
pub(crate) mod listing;
pub mod login;
pub mod messages;
pub mod my_bids;
pub mod profile;
pub mod projects;
pub mod register;
