//! Field-level validation rules for the contact form.
//!
//! Pure value-in, result-out; the component layer decides how failures are
//! rendered.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    Required,
    InvalidEmail,
}

impl FieldError {
    pub fn message(self) -> &'static str {
        match self {
            FieldError::Required => "This field is required",
            FieldError::InvalidEmail => "Please enter a valid email address",
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Validates one field value against its declared constraints. Values are
/// trimmed first; an optional empty field is always valid.
pub fn validate(kind: FieldKind, required: bool, value: &str) -> Result<(), FieldError> {
    let value = value.trim();
    if required && value.is_empty() {
        return Err(FieldError::Required);
    }
    if kind == FieldKind::Email && !value.is_empty() && !EMAIL_RE.is_match(value) {
        return Err(FieldError::InvalidEmail);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_field_rejects_blank_values() {
        for blank in ["", "   ", "\t\n"] {
            assert_eq!(
                validate(FieldKind::Text, true, blank),
                Err(FieldError::Required)
            );
        }
        assert_eq!(validate(FieldKind::Text, true, "hello"), Ok(()));
    }

    #[test]
    fn optional_field_accepts_blank() {
        assert_eq!(validate(FieldKind::Text, false, ""), Ok(()));
        assert_eq!(validate(FieldKind::Email, false, "   "), Ok(()));
    }

    #[test]
    fn email_pattern_matches_plausible_addresses() {
        for good in ["a@b.co", "user.name@example.com", "x+tag@sub.domain.org"] {
            assert_eq!(validate(FieldKind::Email, true, good), Ok(()));
        }
    }

    #[test]
    fn email_pattern_rejects_malformed_addresses() {
        for bad in ["plain", "no@dot", "two@@example.com", "spa ce@example.com", "@example.com", "user@"] {
            assert_eq!(
                validate(FieldKind::Email, true, bad),
                Err(FieldError::InvalidEmail),
                "{bad:?} should be invalid"
            );
        }
    }

    #[test]
    fn required_wins_over_email_kind_on_blank() {
        assert_eq!(
            validate(FieldKind::Email, true, ""),
            Err(FieldError::Required)
        );
    }

    #[test]
    fn messages_match_the_inline_copy() {
        assert_eq!(FieldError::Required.message(), "This field is required");
        assert_eq!(
            FieldError::InvalidEmail.message(),
            "Please enter a valid email address"
        );
    }
}
