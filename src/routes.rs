//! Static route table and per-route access requirements.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use crate::util::guard::{GuardDecision, evaluate};

pub const HOME_PATH: &str = "/";
pub const PROJECTS_PATH: &str = "/projects";
pub const MY_BIDS_PATH: &str = "/my-bids";
pub const MESSAGES_PATH: &str = "/messages";
pub const PROFILE_PATH: &str = "/profile";
pub const LOGIN_PATH: &str = "/login";
pub const REGISTER_PATH: &str = "/register";

/// Who may visit a route.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    RequiresAuth,
    RequiresGuest,
    Public,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub access: Access,
}

pub const ROUTES: [RouteDescriptor; 7] = [
    RouteDescriptor { path: HOME_PATH, name: "Home", access: Access::RequiresAuth },
    RouteDescriptor { path: PROJECTS_PATH, name: "Projects", access: Access::RequiresAuth },
    RouteDescriptor { path: MY_BIDS_PATH, name: "MyBids", access: Access::RequiresAuth },
    RouteDescriptor { path: MESSAGES_PATH, name: "Messages", access: Access::RequiresAuth },
    RouteDescriptor { path: PROFILE_PATH, name: "Profile", access: Access::RequiresAuth },
    RouteDescriptor { path: LOGIN_PATH, name: "Login", access: Access::RequiresGuest },
    RouteDescriptor { path: REGISTER_PATH, name: "Register", access: Access::RequiresGuest },
];

/// Look up a route by exact path. A trailing slash is ignored.
pub fn find(path: &str) -> Option<&'static RouteDescriptor> {
    let normalized = match path.trim_end_matches('/') {
        "" => HOME_PATH,
        trimmed => trimmed,
    };
    ROUTES.iter().find(|route| route.path == normalized)
}

/// Access requirement for `path`; paths outside the table are public.
pub fn access_for(path: &str) -> Access {
    find(path).map_or(Access::Public, |route| route.access)
}

/// Guard decision for navigating to `path`.
pub fn guard_navigation(path: &str, authenticated: bool) -> GuardDecision {
    evaluate(access_for(path), authenticated)
}
