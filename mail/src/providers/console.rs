//! Console email provider for development and testing.

use crate::error::Result;
use crate::providers::EmailProvider;
use async_trait::async_trait;
use tracing::info;

/// Console email provider.
///
/// This provider logs emails instead of sending them. Used whenever no SMTP
/// relay is configured.
///
/// # Examples
///
/// ```
/// use meadowlark_mail::{ConsoleEmailProvider, EmailProvider};
///
/// # tokio_test::block_on(async {
/// let provider = ConsoleEmailProvider::new();
/// provider
///     .send("visitor@example.com", "Hello", "<p>Hi</p>")
///     .await
///     .unwrap();
/// # });
/// ```
#[derive(Clone, Debug, Default)]
pub struct ConsoleEmailProvider;

impl ConsoleEmailProvider {
    /// Create a new console email provider.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl EmailProvider for ConsoleEmailProvider {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        info!(
            to = %to,
            subject = %subject,
            bytes = body.len(),
            "📧 Email (Development Mode)"
        );
        println!("\n╔══════════════════════════════════════════════════════════════╗");
        println!("║ To: {to:<57}║");
        println!("║ Subject: {subject:<52}║");
        println!("╠══════════════════════════════════════════════════════════════╣");
        for line in body.lines().map(str::trim).filter(|l| !l.is_empty()) {
            let mut remaining = line;
            while !remaining.is_empty() {
                let split = remaining
                    .char_indices()
                    .nth(60)
                    .map_or(remaining.len(), |(index, _)| index);
                let (chunk, rest) = remaining.split_at(split);
                println!("║ {chunk:<61}║");
                remaining = rest;
            }
        }
        println!("╚══════════════════════════════════════════════════════════════╝\n");

        Ok(())
    }
}
