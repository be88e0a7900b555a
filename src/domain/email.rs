//! Email value object.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{AppError, AppResult};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

/// Validated email address.
///
/// DDD: Value object - immutable, compared by value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Parse and validate an email address.
    ///
    /// Surrounding whitespace is dropped; the remainder must look like
    /// `local@domain.tld`.
    ///
    /// # Errors
    /// Returns a validation error if the format is invalid.
    pub fn parse(raw: &str) -> AppResult<Self> {
        let candidate = raw.trim();
        if !EMAIL_RE.is_match(candidate) {
            return Err(AppError::validation("Invalid email format"));
        }
        Ok(Self(candidate.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Suffix match used by the disposable-provider rule.
    pub fn ends_with(&self, suffix: &str) -> bool {
        self.0.ends_with(suffix)
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_well_formed_emails_round_trip() {
        for raw in [
            "user@example.com",
            "first.last+tag@sub.domain.org",
            "a@b.co",
            "UPPER@Example.COM",
        ] {
            let email = Email::parse(raw).unwrap();
            assert_eq!(email.to_string(), raw);
            assert_eq!(email.as_str(), raw);
        }
    }

    #[test]
    fn test_malformed_emails_rejected() {
        for raw in [
            "",
            "plainaddress",
            "missing-domain@",
            "@no-local.com",
            "no-tld@domain",
            "two@@signs.com",
            "spaces in@example.com",
        ] {
            let err = Email::parse(raw).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "accepted {raw:?}");
        }
    }

    #[test]
    fn test_surrounding_whitespace_is_trimmed() {
        let email = Email::parse("  user@example.com\n").unwrap();
        assert_eq!(email.as_str(), "user@example.com");
    }

    #[test]
    fn test_equality_by_value() {
        let a = Email::parse("user@example.com").unwrap();
        let b = Email::parse("user@example.com").unwrap();
        let c = Email::parse("other@example.com").unwrap();
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_suffix_match() {
        let email = Email::parse("someone@mail.tempmail.com").unwrap();
        assert!(email.ends_with("tempmail.com"));
        assert!(!email.ends_with("example.com"));
    }
}
