//! Input validation for the project and bid forms.

#[cfg(test)]
#[path = "forms_test.rs"]
mod forms_test;

use crate::net::types::{NewBid, NewProject};

pub(crate) const PROJECT_MISSING_FIELDS: &str = "Enter a title, description and budget.";
pub(crate) const BID_MISSING_FIELDS: &str = "Enter an amount and a cover letter.";
pub(crate) const INVALID_AMOUNT: &str = "Enter a positive amount, e.g. 250.00.";

/// Positive decimal with at most two fractional digits, returned trimmed.
pub(crate) fn parse_amount(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let (whole, fraction) = trimmed.split_once('.').unwrap_or((trimmed, ""));
    let digits_only = |part: &str| part.chars().all(|c| c.is_ascii_digit());
    if whole.is_empty() || !digits_only(whole) || !digits_only(fraction) || fraction.len() > 2 {
        return None;
    }
    if trimmed.contains('.') && fraction.is_empty() {
        return None;
    }
    let positive = trimmed.chars().any(|c| c.is_ascii_digit() && c != '0');
    positive.then(|| trimmed.to_owned())
}

pub(crate) fn validate_new_project(title: &str, description: &str, budget: &str) -> Result<NewProject, &'static str> {
    let title = title.trim();
    let description = description.trim();
    if title.is_empty() || description.is_empty() || budget.trim().is_empty() {
        return Err(PROJECT_MISSING_FIELDS);
    }
    let budget = parse_amount(budget).ok_or(INVALID_AMOUNT)?;
    Ok(NewProject { title: title.to_owned(), description: description.to_owned(), budget })
}

pub(crate) fn validate_new_bid(project: u64, amount: &str, cover_letter: &str) -> Result<NewBid, &'static str> {
    let cover_letter = cover_letter.trim();
    if amount.trim().is_empty() || cover_letter.is_empty() {
        return Err(BID_MISSING_FIELDS);
    }
    let amount = parse_amount(amount).ok_or(INVALID_AMOUNT)?;
    Ok(NewBid { project, amount, cover_letter: cover_letter.to_owned() })
}
