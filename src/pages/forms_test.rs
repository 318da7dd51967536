use super::*;

// =============================================================
// parse_amount
// =============================================================

#[test]
fn parse_amount_accepts_whole_and_cents() {
    assert_eq!(parse_amount(" 250 ").as_deref(), Some("250"));
    assert_eq!(parse_amount("99.5").as_deref(), Some("99.5"));
    assert_eq!(parse_amount("0.01").as_deref(), Some("0.01"));
}

#[test]
fn parse_amount_rejects_bad_shapes() {
    for raw in ["", "0", "0.00", "-5", "1.234", "12.", ".5", "1e3", "abc", "1.2.3"] {
        assert_eq!(parse_amount(raw), None, "{raw}");
    }
}

// =============================================================
// Forms
// =============================================================

#[test]
fn validate_new_project_trims_fields() {
    assert_eq!(
        validate_new_project(" Logo ", " Vector logo ", "100.00"),
        Ok(NewProject { title: "Logo".to_owned(), description: "Vector logo".to_owned(), budget: "100.00".to_owned() })
    );
}

#[test]
fn validate_new_project_requires_fields_and_amount() {
    assert_eq!(validate_new_project("", "d", "10"), Err(PROJECT_MISSING_FIELDS));
    assert_eq!(validate_new_project("t", "d", " "), Err(PROJECT_MISSING_FIELDS));
    assert_eq!(validate_new_project("t", "d", "ten"), Err(INVALID_AMOUNT));
}

#[test]
fn validate_new_bid_builds_payload() {
    assert_eq!(
        validate_new_bid(9, "90", " I can do it "),
        Ok(NewBid { project: 9, amount: "90".to_owned(), cover_letter: "I can do it".to_owned() })
    );
    assert_eq!(validate_new_bid(9, "90", "  "), Err(BID_MISSING_FIELDS));
    assert_eq!(validate_new_bid(9, "0", "Hi"), Err(INVALID_AMOUNT));
}
