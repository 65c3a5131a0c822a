//! Field validation shared by every form that collects an email address.

use regex::Regex;
use std::sync::LazyLock;

/// Local part, `@`, then two or more dot-separated labels of 1-63
/// alphanumerics with inner hyphens.
const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$";

#[allow(clippy::expect_used)] // Literal pattern, exercised by the tests below
static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern compiles"));

/// Result of checking a submitted value against its acceptance rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Validation {
    /// The value is acceptable.
    Valid,
    /// The value was rejected.
    Invalid(String),
}

impl Validation {
    /// Returns `true` for [`Validation::Valid`].
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }
}

/// Check `value` against the email grammar.
///
/// Pure: the same input always yields the same result. Empty input is
/// invalid.
#[must_use]
pub fn validate_email(value: &str) -> Validation {
    if value.is_empty() {
        return Validation::Invalid("email address is required".to_string());
    }

    if !value.contains('@') {
        return Validation::Invalid("email address is missing '@'".to_string());
    }

    if EMAIL.is_match(value) {
        Validation::Valid
    } else {
        Validation::Invalid("email address is not well formed".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_accepts_common_addresses() {
        for email in [
            "a@b.com",
            "jane.doe@example.co.uk",
            "first+tag@sub-domain.example.org",
            "o'brien@mail.ie",
            "x@a1.b2",
        ] {
            assert_eq!(validate_email(email), Validation::Valid, "{email}");
        }
    }

    #[test]
    fn test_rejects_malformed_addresses() {
        for email in [
            "",
            "not-an-email",
            "@example.com",
            "user@",
            "user@localhost",
            "user@-example.com",
            "user@example-.com",
            "user@example..com",
            "user@exa_mple.com",
            "us er@example.com",
            "user@example.com.",
        ] {
            assert!(!validate_email(email).is_valid(), "{email}");
        }
    }

    #[test]
    fn test_label_length_limit() {
        let ok = format!("user@{}.com", "a".repeat(63));
        let too_long = format!("user@{}.com", "a".repeat(64));
        assert!(validate_email(&ok).is_valid());
        assert!(!validate_email(&too_long).is_valid());
    }

    #[test]
    fn test_empty_reason_mentions_requirement() {
        assert_eq!(
            validate_email(""),
            Validation::Invalid("email address is required".to_string())
        );
    }

    proptest! {
        #[test]
        fn prop_grammar_addresses_are_valid(
            local in "[a-zA-Z0-9._%+-]{1,20}",
            label in "[a-z0-9]([a-z0-9-]{0,10}[a-z0-9])?",
            tld in "[a-z]{2,6}",
        ) {
            let email = format!("{local}@{label}.{tld}");
            prop_assert_eq!(validate_email(&email), Validation::Valid);
        }

        #[test]
        fn prop_without_at_sign_is_invalid(value in "[^@]{0,40}") {
            prop_assert!(!validate_email(&value).is_valid());
        }

        #[test]
        fn prop_single_label_domain_is_invalid(
            local in "[a-z0-9]{1,10}",
            label in "[a-z0-9]{1,10}",
        ) {
            let email = format!("{local}@{label}");
            prop_assert!(!validate_email(&email).is_valid());
        }

        #[test]
        fn prop_validation_is_idempotent(value in ".{0,40}") {
            prop_assert_eq!(validate_email(&value), validate_email(&value));
        }
    }
}
