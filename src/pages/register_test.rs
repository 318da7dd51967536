use super::*;

#[test]
fn validate_register_input_builds_payload() {
    assert_eq!(
        validate_register_input(" bob ", " bob@example.com ", "hunter2", "freelancer"),
        Ok(RegisterData {
            username: "bob".to_owned(),
            email: "bob@example.com".to_owned(),
            password: "hunter2".to_owned(),
            role: Role::Freelancer,
        })
    );
}

#[test]
fn validate_register_input_requires_every_field() {
    assert_eq!(validate_register_input("", "bob@example.com", "pw", "client"), Err(MISSING_FIELDS));
    assert_eq!(validate_register_input("bob", "  ", "pw", "client"), Err(MISSING_FIELDS));
    assert_eq!(validate_register_input("bob", "bob@example.com", "", "client"), Err(MISSING_FIELDS));
}

#[test]
fn validate_register_input_checks_email_shape() {
    assert_eq!(validate_register_input("bob", "bob.example.com", "pw", "client"), Err(INVALID_EMAIL));
}

#[test]
fn validate_register_input_rejects_unknown_role() {
    assert_eq!(validate_register_input("bob", "bob@example.com", "pw", "admin"), Err(INVALID_ROLE));
}
