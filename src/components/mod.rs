//! Reusable UI components.

pub mod bid_form;
pub mod nav_bar;
