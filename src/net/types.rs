//! Wire DTOs for the marketplace REST API.
//!
//! DESIGN
//! ======
//! Field names mirror the server's JSON exactly. Decimal amounts stay strings
//! because the server serializes them that way and the client never does
//! arithmetic on them.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Marketplace role chosen at registration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Freelancer,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Freelancer => "freelancer",
        }
    }

    /// Parse the wire name of a role. Returns `None` for anything else.
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "client" => Some(Self::Client),
            "freelancer" => Some(Self::Freelancer),
            _ => None,
        }
    }
}

/// Identity of the signed-in user.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    /// Empty after login: the login endpoint does not return it.
    pub email: String,
    pub role: Role,
}

/// Body of `POST /api/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginCredentials {
    pub username: String,
    pub password: String,
}

/// Success body of `POST /api/login/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user_id: u64,
    pub username: String,
    pub role: Role,
}

impl LoginResponse {
    /// Identity carried by a login response.
    pub fn user(&self) -> User {
        User { id: self.user_id, username: self.username.clone(), email: String::new(), role: self.role }
    }
}

/// Body of `POST /api/register/`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisterData {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: Role,
}

/// Lifecycle status of a project listing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    Open,
    InProgress,
    Completed,
    Cancelled,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
        }
    }
}

/// A project posted by a client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub budget: String,
    /// Display form of the posting client, e.g. `alice (client)`.
    pub client: String,
    pub status: ProjectStatus,
    pub created_at: String,
}

/// A freelancer's bid on a project.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bid {
    pub id: u64,
    /// Display form of the project, e.g. `Logo (open)`.
    pub project: String,
    /// Display form of the bidding freelancer, e.g. `bob (freelancer)`.
    pub freelancer: String,
    pub amount: String,
    pub cover_letter: String,
    pub created_at: String,
}

/// Body of `POST /api/projects/`. The server sets the owning client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub budget: String,
}

/// Body of `POST /api/bids/`. The server sets the bidding freelancer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewBid {
    pub project: u64,
    pub amount: String,
    pub cover_letter: String,
}

/// Filters for `GET /api/projects/`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectQuery {
    /// Title search term.
    pub search: Option<String>,
    /// Only the caller's own projects (`client=me`).
    pub mine: bool,
}

impl ProjectQuery {
    /// Query string including the leading `?`, or empty when unfiltered.
    pub fn to_query_string(&self) -> String {
        let mut params = Vec::new();
        if let Some(term) = self.search.as_deref().map(str::trim).filter(|t| !t.is_empty()) {
            params.push(format!("search={}", urlencoding::encode(term)));
        }
        if self.mine {
            params.push("client=me".to_owned());
        }
        if params.is_empty() { String::new() } else { format!("?{}", params.join("&")) }
    }
}
