//! Outbound email for the Meadowlark site.
//!
//! Email delivery is a side effect the visitor never waits on. Handlers build
//! an [`Email`] and give it to a [`Dispatcher`], which sends it on a background
//! task and reports the outcome to logs and metrics only.
//!
//! ```text
//! handler ──dispatch()──▶ tokio::spawn ──▶ EmailProvider::send()
//!    │                                           │
//!    ▼                                           ▼
//! response                              tracing + metrics
//! ```
//!
//! Providers:
//!
//! - [`ConsoleEmailProvider`]: logs the message, for development
//! - [`SmtpEmailProvider`]: delivers over SMTP with `lettre`
//! - [`mocks::MockEmailProvider`]: records sends, with optional failure and delay

pub mod dispatcher;
pub mod error;
pub mod providers;

#[cfg(any(test, feature = "test-utils"))]
pub mod mocks;

pub use dispatcher::Dispatcher;
pub use error::{MailError, Result};
pub use providers::{ConsoleEmailProvider, Email, EmailProvider, SmtpEmailProvider};
