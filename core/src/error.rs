//! Error types for domain operations that cannot be answered in place.
//!
//! Validation failures on the newsletter form are reported back to the
//! visitor through a [`SignupOutcome`](crate::newsletter::SignupOutcome) and
//! never surface here. The errors below are the ones the web layer propagates
//! to its terminal error boundary.

use thiserror::Error;

/// Result type alias for domain operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Failures raised by the checkout flow.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The visitor's session holds no cart.
    #[error("Cart does not exist.")]
    CartMissing,

    /// The billing email failed validation.
    #[error("Invalid email address.")]
    InvalidEmail {
        /// Why the validator rejected the address.
        reason: String,
    },
}

impl Error {
    /// Whether the failure was caused by visitor input rather than flow state.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidEmail { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_match_user_facing_text() {
        assert_eq!(Error::CartMissing.to_string(), "Cart does not exist.");
        let err = Error::InvalidEmail {
            reason: "missing @".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid email address.");
        assert!(err.is_validation());
        assert!(!Error::CartMissing.is_validation());
    }
}
