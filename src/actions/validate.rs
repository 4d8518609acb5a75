// Declarative-ish field validation: small helpers that each enforce one
// rule and surface the rule's message. Actions run them in order and return
// the first violation untouched.
use std::str::FromStr;

use chrono::NaiveDate;

/// Basic email shape check: one '@', a dot, both sides non-empty.
pub fn validate_email(email: &str) -> Result<(), String> {
    let well_formed = email.contains('.')
        && matches!(
            email.split('@').collect::<Vec<_>>().as_slice(),
            [local, domain] if !local.is_empty() && !domain.is_empty()
        );
    if well_formed {
        Ok(())
    } else {
        Err("Invalid email address".to_string())
    }
}

/// Required field with a length ceiling; empty and too-long each carry
/// their own message.
pub fn validate_required_text(
    value: &str,
    max: usize,
    empty_msg: &str,
    long_msg: &str,
) -> Result<(), String> {
    if value.is_empty() {
        return Err(empty_msg.to_string());
    }
    if value.chars().count() > max {
        return Err(long_msg.to_string());
    }
    Ok(())
}

pub fn validate_min_length(value: &str, min: usize, msg: &str) -> Result<(), String> {
    if value.chars().count() < min {
        return Err(msg.to_string());
    }
    Ok(())
}

pub fn validate_max_length(value: &str, max: usize, msg: &str) -> Result<(), String> {
    if value.chars().count() > max {
        return Err(msg.to_string());
    }
    Ok(())
}

/// Parse one of the closed enumerations, replacing the parser's message with
/// the field's "Please select a ..." message.
pub fn parse_enum<T: FromStr>(value: Option<&str>, msg: &str) -> Result<T, String> {
    value
        .unwrap_or_default()
        .parse()
        .map_err(|_| msg.to_string())
}

/// Comma-separated skills to an ordered list; entries are trimmed and
/// empties dropped.
pub fn parse_skills(raw: Option<&str>) -> Vec<String> {
    raw.unwrap_or_default()
        .split(',')
        .map(str::trim)
        .filter(|skill| !skill.is_empty())
        .map(str::to_string)
        .collect()
}

/// Optional ISO date; empty input means no deadline.
pub fn parse_deadline(raw: Option<&str>) -> Result<Option<NaiveDate>, String> {
    match raw.map(str::trim) {
        None | Some("") => Ok(None),
        Some(text) => NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .map(Some)
            .map_err(|_| "Application deadline must be a valid date".to_string()),
    }
}
