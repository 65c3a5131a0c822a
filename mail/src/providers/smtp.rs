//! SMTP email provider implementation using Lettre.

use crate::error::{MailError, Result};
use crate::providers::EmailProvider;
use async_trait::async_trait;
use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor};
use std::time::Duration;

/// How long a single SMTP exchange may take before it is abandoned.
pub const DEFAULT_SMTP_TIMEOUT: Duration = Duration::from_secs(10);

/// SMTP email provider using Lettre.
///
/// This provider sends real emails via an SMTP relay over TLS.
///
/// # Examples
///
/// ```ignore
/// use meadowlark_mail::SmtpEmailProvider;
///
/// let provider = SmtpEmailProvider::new(
///     "smtp.example.com",
///     587,
///     "user".to_string(),
///     "app_password".to_string(),
///     "noreply@meadowlarktravel.com",
///     "Meadowlark Travel",
/// )?;
/// ```
#[derive(Clone)]
pub struct SmtpEmailProvider {
    /// Pooled async transport.
    mailer: AsyncSmtpTransport<Tokio1Executor>,

    /// Sender mailbox (`Name <address>`).
    from: Mailbox,
}

impl SmtpEmailProvider {
    /// Create a new SMTP email provider.
    ///
    /// # Arguments
    ///
    /// - `smtp_server`: SMTP relay host
    /// - `smtp_port`: SMTP relay port
    /// - `smtp_username`: SMTP authentication username
    /// - `smtp_password`: SMTP authentication password
    /// - `from_email`: Sender email address
    /// - `from_name`: Sender display name
    ///
    /// # Errors
    ///
    /// Returns error if the relay host or sender address is invalid.
    pub fn new(
        smtp_server: &str,
        smtp_port: u16,
        smtp_username: String,
        smtp_password: String,
        from_email: &str,
        from_name: &str,
    ) -> Result<Self> {
        let mailer = AsyncSmtpTransport::<Tokio1Executor>::relay(smtp_server)
            .map_err(|e| MailError::Transport(format!("SMTP relay error: {e}")))?
            .port(smtp_port)
            .credentials(Credentials::new(smtp_username, smtp_password))
            .timeout(Some(DEFAULT_SMTP_TIMEOUT))
            .build();

        let from = format!("{from_name} <{from_email}>")
            .parse()
            .map_err(|e| MailError::InvalidAddress(format!("from {from_email}: {e}")))?;

        Ok(Self { mailer, from })
    }

    fn build_message(&self, to: &str, subject: &str, body: &str) -> Result<Message> {
        let to: Mailbox = to
            .parse()
            .map_err(|e| MailError::InvalidAddress(format!("to {to}: {e}")))?;

        Message::builder()
            .from(self.from.clone())
            .to(to)
            .subject(subject)
            .header(ContentType::TEXT_HTML)
            .body(body.to_string())
            .map_err(|e| MailError::Build(e.to_string()))
    }
}

#[async_trait]
impl EmailProvider for SmtpEmailProvider {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        let message = self.build_message(to, subject, body)?;

        self.mailer
            .send(message)
            .await
            .map(|_| ())
            .map_err(|e| MailError::Transport(e.to_string()))
    }
}
