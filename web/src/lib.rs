//! Meadowlark Travel web server.
//!
//! Axum shell around the `meadowlark-core` domain, following the "Functional
//! Core, Imperative Shell" split.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │         Imperative Shell (Axum)         │  ← HTTP, forms, cookies
//! │  - Reply negotiation                    │  ← Sessions, static files
//! │  - Rendering and redirects              │  ← Logging, metrics
//! ├─────────────────────────────────────────┤
//! │         Functional Core                 │
//! │  - Email validation                     │  ← Testable at memory speed
//! │  - Flash and cart state                 │  ← No I/O
//! │  - Signup and checkout outcomes         │  ← Plain values
//! └─────────────────────────────────────────┘
//! ```
//!
//! # Request Flow
//!
//! 1. **HTTP Request** arrives at an Axum handler
//! 2. **Negotiate** the reply mode from `X-Requested-With` and `Accept`
//! 3. **Load** the visitor's session data
//! 4. **Decide** the outcome in `meadowlark-core`
//! 5. **Write back** the session, dispatch email in the background
//! 6. **Reply** with JSON, or with a flash and a 303 redirect, or a page
//!
//! # Example
//!
//! ```ignore
//! use meadowlark_web::{build_router, AppState, Config};
//!
//! let state = AppState::from_config(Config::from_env())?;
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:3000").await?;
//! axum::serve(listener, build_router(state)).await?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod session;
pub mod state;
pub mod views;

// Re-export key types for convenience
pub use config::{Config, Environment, MailConfig, SmtpConfig};
pub use error::AppError;
pub use extractors::{Negotiated, Page, Submission};
pub use router::build_router;
pub use session::{VisitorSession, SESSION_KEY};
pub use state::AppState;
pub use views::{MaudRenderer, PageContext, RenderError, Renderer, View};

/// Result type alias for web handlers.
pub type WebResult<T> = Result<T, AppError>;
