//! Error types for web handlers.
//!
//! [`AppError`] is the single type handlers propagate with `?`. It carries
//! the HTTP status and a user-facing message; the underlying cause is kept
//! for logging only. Converting it into a response tags the response with
//! [`ErrorPage`] so the error-page middleware can swap in a rendered page.

use crate::views::RenderError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

/// Code for bad input that still ends at the error boundary. Logged as a
/// warning rather than a fault.
const VALIDATION_CODE: &str = "VALIDATION_ERROR";

/// Marker placed in response extensions by [`AppError`].
///
/// The [`error_pages`](crate::middleware::error_pages) middleware renders the
/// matching view for any response carrying it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ErrorPage;

/// Application error type for web handlers.
///
/// # Examples
///
/// ```ignore
/// async fn handler() -> Result<Html<String>, AppError> {
///     let cart = session.cart().ok_or_else(|| AppError::internal("Cart does not exist."))?;
///     Ok(render(cart)?)
/// }
/// ```
#[derive(Debug)]
pub struct AppError {
    /// HTTP status code
    status: StatusCode,
    /// Error message (user-facing)
    message: String,
    /// Error code (for logs)
    code: &'static str,
    /// Internal error (for logging, not exposed to client)
    source: Option<anyhow::Error>,
}

impl AppError {
    /// Create a new application error.
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>, code: &'static str) -> Self {
        Self {
            status,
            message: message.into(),
            code,
            source: None,
        }
    }

    /// Attach the underlying cause.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<anyhow::Error>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Create a 400 Bad Request error.
    #[must_use]
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message, "BAD_REQUEST")
    }

    /// Create a 404 Not Found error.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message, "NOT_FOUND")
    }

    /// Create a 500 Internal Server Error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message, "INTERNAL_SERVER_ERROR")
    }

    /// HTTP status this error maps to.
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// User-facing message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.code == VALIDATION_CODE {
            tracing::warn!(
                status = %self.status,
                source = ?self.source,
                "Rejected invalid input"
            );
        } else if self.status.is_server_error() {
            if let Some(source) = &self.source {
                tracing::error!(
                    status = %self.status,
                    code = %self.code,
                    message = %self.message,
                    error = ?source,
                    "Internal server error"
                );
            } else {
                tracing::error!(
                    status = %self.status,
                    code = %self.code,
                    message = %self.message,
                    "Internal server error"
                );
            }
        } else {
            tracing::info!(
                status = %self.status,
                code = %self.code,
                message = %self.message,
                "Request rejected"
            );
        }

        let mut response = (self.status, self.message).into_response();
        response.extensions_mut().insert(ErrorPage);
        response
    }
}

/// Convert `anyhow::Error` to `AppError`.
impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        Self::internal("An internal error occurred").with_source(err)
    }
}

impl From<meadowlark_core::Error> for AppError {
    fn from(err: meadowlark_core::Error) -> Self {
        let code = if err.is_validation() {
            VALIDATION_CODE
        } else {
            "PRECONDITION_FAILED"
        };
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, "An internal error occurred", code)
            .with_source(err)
    }
}

impl From<tower_sessions::session::Error> for AppError {
    fn from(err: tower_sessions::session::Error) -> Self {
        Self::internal("An internal error occurred").with_source(err)
    }
}

impl From<RenderError> for AppError {
    fn from(err: RenderError) -> Self {
        Self::internal("An internal error occurred").with_source(err)
    }
}
