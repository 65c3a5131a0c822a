//! Mock email provider for testing.

use crate::error::{MailError, Result};
use crate::providers::{Email, EmailProvider};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// Mock email provider.
///
/// Records every send attempt, then optionally waits and optionally fails, so
/// tests can simulate a slow or broken transport.
#[derive(Debug, Clone)]
pub struct MockEmailProvider {
    /// Whether to simulate success or failure.
    pub should_succeed: bool,
    /// Simulated transport latency.
    pub delay: Option<Duration>,
    attempts: Arc<Mutex<Vec<Email>>>,
    delivered: Arc<Mutex<Vec<Email>>>,
}

impl MockEmailProvider {
    /// Create a new mock email provider that succeeds immediately.
    #[must_use]
    pub fn new() -> Self {
        Self {
            should_succeed: true,
            delay: None,
            attempts: Arc::default(),
            delivered: Arc::default(),
        }
    }

    /// Create a mock whose sends always fail.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            should_succeed: false,
            ..Self::new()
        }
    }

    /// Add simulated latency to every send.
    #[must_use]
    pub const fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Every message handed to [`EmailProvider::send`], in call order.
    #[must_use]
    pub fn attempts(&self) -> Vec<Email> {
        self.attempts.lock().map(|g| g.clone()).unwrap_or_default()
    }

    /// Messages whose send completed successfully.
    #[must_use]
    pub fn delivered(&self) -> Vec<Email> {
        self.delivered.lock().map(|g| g.clone()).unwrap_or_default()
    }
}

impl Default for MockEmailProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl EmailProvider for MockEmailProvider {
    async fn send(&self, to: &str, subject: &str, body: &str) -> Result<()> {
        let email = Email::new(to, subject, body);
        self.attempts
            .lock()
            .map_err(|_| MailError::Transport("mock lock poisoned".to_string()))?
            .push(email.clone());

        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }

        if !self.should_succeed {
            return Err(MailError::Transport("mock transport unreachable".to_string()));
        }

        self.delivered
            .lock()
            .map_err(|_| MailError::Transport("mock lock poisoned".to_string()))?
            .push(email);
        Ok(())
    }
}
