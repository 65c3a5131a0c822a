//! Error types for email delivery.

use thiserror::Error;

/// Result type alias for email operations.
pub type Result<T> = std::result::Result<T, MailError>;

/// Ways an email can fail to go out.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MailError {
    /// A sender or recipient address could not be parsed.
    #[error("Invalid address: {0}")]
    InvalidAddress(String),

    /// The message could not be assembled.
    #[error("Failed to build email: {0}")]
    Build(String),

    /// The transport refused or could not deliver the message.
    #[error("Failed to send email: {0}")]
    Transport(String),
}
