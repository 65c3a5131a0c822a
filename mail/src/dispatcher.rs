//! Fire-and-forget email dispatch.
//!
//! [`Dispatcher::dispatch`] returns as soon as the send task is spawned. The
//! task's outcome goes to `tracing` and `metrics`; nothing flows back into the
//! request that asked for the email. The returned [`JoinHandle`] exists for
//! tests and shutdown hooks; request handlers drop it.
//!
//! # Metrics
//!
//! - `meadowlark.email.sent` (counter)
//! - `meadowlark.email.failed` (counter)

use crate::providers::{Email, EmailProvider};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::Instrument;

/// Spawns email sends onto the runtime.
#[derive(Clone)]
pub struct Dispatcher {
    provider: Arc<dyn EmailProvider>,
}

impl std::fmt::Debug for Dispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dispatcher").finish_non_exhaustive()
    }
}

impl Dispatcher {
    /// Create a dispatcher over `provider`.
    #[must_use]
    pub fn new(provider: Arc<dyn EmailProvider>) -> Self {
        Self { provider }
    }

    /// Send `email` in the background.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn dispatch(&self, email: Email) -> JoinHandle<()> {
        let provider = Arc::clone(&self.provider);
        let span = tracing::info_span!("email_dispatch", to = %email.to, subject = %email.subject);

        tokio::spawn(
            async move {
                match provider.send(&email.to, &email.subject, &email.body).await {
                    Ok(()) => {
                        metrics::counter!("meadowlark.email.sent").increment(1);
                        tracing::info!("Email sent");
                    }
                    Err(error) => {
                        metrics::counter!("meadowlark.email.failed").increment(1);
                        tracing::error!(%error, "Email delivery failed");
                    }
                }
            }
            .instrument(span),
        )
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can use unwrap
mod tests {
    use super::*;
    use crate::mocks::MockEmailProvider;
    use std::time::Duration;

    fn email() -> Email {
        Email::new("ann@example.com", "Thanks", "<p>Booked</p>")
    }

    #[tokio::test]
    async fn test_dispatch_delivers_through_provider() {
        let mock = MockEmailProvider::new();
        let dispatcher = Dispatcher::new(Arc::new(mock.clone()));

        dispatcher.dispatch(email()).await.unwrap();

        assert_eq!(mock.delivered(), vec![email()]);
    }

    #[tokio::test]
    async fn test_dispatch_swallows_transport_failure() {
        let mock = MockEmailProvider::failing();
        let dispatcher = Dispatcher::new(Arc::new(mock.clone()));

        // The task completes normally even though delivery failed.
        dispatcher.dispatch(email()).await.unwrap();

        assert_eq!(mock.attempts().len(), 1);
        assert!(mock.delivered().is_empty());
    }

    #[tokio::test]
    async fn test_dispatch_returns_before_slow_send_finishes() {
        let mock = MockEmailProvider::new().with_delay(Duration::from_secs(30));
        let dispatcher = Dispatcher::new(Arc::new(mock.clone()));

        let started = std::time::Instant::now();
        let handle = dispatcher.dispatch(email());
        assert!(started.elapsed() < Duration::from_secs(1));
        assert!(!handle.is_finished());

        handle.abort();
        assert!(mock.delivered().is_empty());
    }
}
