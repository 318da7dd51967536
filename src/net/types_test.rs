use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_serializes_to_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Client).unwrap(), "\"client\"");
    assert_eq!(serde_json::to_string(&Role::Freelancer).unwrap(), "\"freelancer\"");
}

#[test]
fn role_parse_rejects_unknown_names() {
    assert_eq!(Role::parse("freelancer"), Some(Role::Freelancer));
    assert_eq!(Role::parse("Client"), None);
    assert_eq!(Role::parse(""), None);
}

// =============================================================
// LoginResponse
// =============================================================

#[test]
fn login_response_builds_user_with_empty_email() {
    let resp: LoginResponse = serde_json::from_value(serde_json::json!({
        "token": "abc123",
        "user_id": 1,
        "username": "alice",
        "role": "client"
    }))
    .unwrap();
    assert_eq!(
        resp.user(),
        User { id: 1, username: "alice".to_owned(), email: String::new(), role: Role::Client }
    );
}

#[test]
fn login_response_rejects_unknown_role() {
    let parsed = serde_json::from_value::<LoginResponse>(serde_json::json!({
        "token": "abc123",
        "user_id": 1,
        "username": "alice",
        "role": "admin"
    }));
    assert!(parsed.is_err());
}

// =============================================================
// RegisterData
// =============================================================

#[test]
fn register_data_serializes_expected_fields() {
    let data = RegisterData {
        username: "bob".to_owned(),
        email: "bob@example.com".to_owned(),
        password: "hunter2".to_owned(),
        role: Role::Freelancer,
    };
    assert_eq!(
        serde_json::to_value(&data).unwrap(),
        serde_json::json!({
            "username": "bob",
            "email": "bob@example.com",
            "password": "hunter2",
            "role": "freelancer"
        })
    );
}

// =============================================================
// Project / Bid
// =============================================================

#[test]
fn project_parses_server_listing() {
    let project: Project = serde_json::from_value(serde_json::json!({
        "id": 7,
        "title": "Landing page",
        "description": "Static site",
        "budget": "250.00",
        "client": "alice (client)",
        "status": "in_progress",
        "created_at": "2024-05-01T12:00:00Z"
    }))
    .unwrap();
    assert_eq!(project.status, ProjectStatus::InProgress);
    assert_eq!(project.status.label(), "In Progress");
    assert_eq!(project.budget, "250.00");
}

#[test]
fn bid_parses_server_listing() {
    let bid: Bid = serde_json::from_value(serde_json::json!({
        "id": 3,
        "project": "Landing page (open)",
        "freelancer": "bob (freelancer)",
        "amount": "200.00",
        "cover_letter": "I can do it",
        "created_at": "2024-05-02T08:30:00Z"
    }))
    .unwrap();
    assert_eq!(bid.project, "Landing page (open)");
    assert_eq!(bid.freelancer, "bob (freelancer)");
}

#[test]
fn project_keeps_related_client_display_form() {
    let project: Project = serde_json::from_value(serde_json::json!({
        "id": 1,
        "title": "Logo",
        "description": "Vector logo",
        "budget": "100.00",
        "client": "alice (client)",
        "status": "open",
        "created_at": "2024-05-01T12:00:00Z"
    }))
    .unwrap();
    assert_eq!(project.client, "alice (client)");
}

// =============================================================
// NewProject / NewBid
// =============================================================

#[test]
fn new_bid_serializes_project_id() {
    let bid = NewBid { project: 7, amount: "200.00".to_owned(), cover_letter: "Hi".to_owned() };
    assert_eq!(
        serde_json::to_value(&bid).unwrap(),
        serde_json::json!({"project": 7, "amount": "200.00", "cover_letter": "Hi"})
    );
}

// =============================================================
// ProjectQuery
// =============================================================

#[test]
fn project_query_default_is_empty() {
    assert_eq!(ProjectQuery::default().to_query_string(), "");
}

#[test]
fn project_query_encodes_search_term() {
    let query = ProjectQuery { search: Some(" logo & brand ".to_owned()), mine: false };
    assert_eq!(query.to_query_string(), "?search=logo%20%26%20brand");
}

#[test]
fn project_query_combines_search_and_mine() {
    let query = ProjectQuery { search: Some("logo".to_owned()), mine: true };
    assert_eq!(query.to_query_string(), "?search=logo&client=me");
}

#[test]
fn project_query_ignores_blank_search() {
    let query = ProjectQuery { search: Some("   ".to_owned()), mine: true };
    assert_eq!(query.to_query_string(), "?client=me");
}
