use super::*;
use crate::net::types::{Role, User};

fn signed_in(role: Role) -> AuthState {
    AuthState {
        token: Some("abc123".to_owned()),
        user: Some(User { id: 1, username: "alice".to_owned(), email: String::new(), role }),
        ..AuthState::default()
    }
}

#[test]
fn greeting_uses_username() {
    assert_eq!(greeting(&signed_in(Role::Client)), "Welcome back, alice!");
    assert_eq!(greeting(&AuthState::default()), "Welcome!");
}

#[test]
fn role_tagline_depends_on_role() {
    assert!(role_tagline(&signed_in(Role::Client)).starts_with("Post projects"));
    assert!(role_tagline(&signed_in(Role::Freelancer)).starts_with("Browse open projects"));
    assert_eq!(role_tagline(&AuthState::default()), "");
}
