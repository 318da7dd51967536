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
fn clients_see_incoming_bids() {
    let state = signed_in(Role::Client);
    assert_eq!(bids_title(&state), "Bids on my projects");
    assert_eq!(empty_bids_message(&state), "No freelancer has bid on your projects yet.");
}

#[test]
fn freelancers_see_their_own_bids() {
    let state = signed_in(Role::Freelancer);
    assert_eq!(bids_title(&state), "My Bids");
    assert_eq!(empty_bids_message(&state), "You have not placed any bids.");
}
