//! Application state for Axum handlers.
//!
//! Every collaborator sits behind a trait object so tests can swap in
//! in-memory or failing doubles without touching the handlers.

use crate::config::Config;
use crate::views::{MaudRenderer, Renderer};
use meadowlark_core::{
    Clock, NoopSignupRepository, OrderNumberGenerator, RandomOrderNumbers, SignupRepository,
    SystemClock,
};
use meadowlark_mail::{ConsoleEmailProvider, Dispatcher, EmailProvider, SmtpEmailProvider};
use std::sync::Arc;

/// Application state shared across all HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<Config>,
    /// Page and email templates.
    pub renderer: Arc<dyn Renderer>,
    /// Newsletter signup storage.
    pub signups: Arc<dyn SignupRepository>,
    /// Background email sender.
    pub mailer: Dispatcher,
    /// Source of "now" for the contest form.
    pub clock: Arc<dyn Clock>,
    /// Order number source for checkout.
    pub order_numbers: Arc<dyn OrderNumberGenerator>,
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("mailer", &self.mailer)
            .finish_non_exhaustive()
    }
}

impl AppState {
    /// Create state that sends mail through `email`.
    ///
    /// Everything else takes the production default: maud templates, a
    /// signup store that keeps nothing, the system clock and random order
    /// numbers.
    #[must_use]
    pub fn new(config: Config, email: Arc<dyn EmailProvider>) -> Self {
        Self {
            config: Arc::new(config),
            renderer: Arc::new(MaudRenderer),
            signups: Arc::new(NoopSignupRepository),
            mailer: Dispatcher::new(email),
            clock: Arc::new(SystemClock),
            order_numbers: Arc::new(RandomOrderNumbers),
        }
    }

    /// Build state from configuration, choosing SMTP when a relay is set and
    /// the console provider otherwise.
    ///
    /// # Errors
    ///
    /// Returns error if the SMTP relay or sender address is invalid.
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let mail = &config.mail;
        let email: Arc<dyn EmailProvider> = match &mail.smtp {
            Some(smtp) => {
                tracing::info!(
                    host = %smtp.host,
                    port = smtp.port,
                    "Sending mail through SMTP relay"
                );
                Arc::new(SmtpEmailProvider::new(
                    &smtp.host,
                    smtp.port,
                    smtp.username.clone(),
                    smtp.password.clone(),
                    &mail.from_email,
                    &mail.from_name,
                )?)
            }
            None => {
                tracing::info!("SMTP_HOST not set; mail will be written to the log");
                Arc::new(ConsoleEmailProvider::new())
            }
        };
        Ok(Self::new(config, email))
    }

    /// Replace the renderer.
    #[must_use]
    pub fn with_renderer(mut self, renderer: Arc<dyn Renderer>) -> Self {
        self.renderer = renderer;
        self
    }

    /// Replace the signup repository.
    #[must_use]
    pub fn with_signups(mut self, signups: Arc<dyn SignupRepository>) -> Self {
        self.signups = signups;
        self
    }

    /// Replace the clock.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replace the order number generator.
    #[must_use]
    pub fn with_order_numbers(mut self, order_numbers: Arc<dyn OrderNumberGenerator>) -> Self {
        self.order_numbers = order_numbers;
        self
    }
}
