//! Email providers.
//!
//! [`EmailProvider`] is the transport seam: `send(to, subject, body)`. It is
//! object safe so the web layer can hold an `Arc<dyn EmailProvider>` chosen
//! from configuration at startup.

use crate::error::Result;
use async_trait::async_trait;

pub mod console;
pub mod smtp;

pub use console::ConsoleEmailProvider;
pub use smtp::SmtpEmailProvider;

/// A fully rendered message waiting to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email {
    /// Recipient address.
    pub to: String,
    /// Subject line.
    pub subject: String,
    /// HTML body.
    pub body: String,
}

impl Email {
    /// Create an email.
    #[must_use]
    pub fn new(to: impl Into<String>, subject: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            to: to.into(),
            subject: subject.into(),
            body: body.into(),
        }
    }
}

/// Email provider.
///
/// This trait abstracts over email delivery services (SMTP relays, hosted
/// APIs, or a development console).
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Send one message.
    ///
    /// # Arguments
    ///
    /// - `to`: Recipient email address
    /// - `subject`: Subject line
    /// - `body`: HTML body
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - An address cannot be parsed
    /// - The transport is unreachable
    /// - The server rejects the recipient
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()>;
}
