//! Custom Axum extractors.
//!
//! - [`Negotiated`]: the reply mode chosen from `X-Requested-With` and `Accept`
//! - [`Submission`]: a form body, either urlencoded or JSON
//! - [`Page`]: the session plus page flags, for handlers that render HTML
//!
//! # Examples
//!
//! ```ignore
//! async fn handler(
//!     State(state): State<AppState>,
//!     Negotiated(mode): Negotiated,
//!     page: Page,
//!     Submission(form): Submission<SignupForm>,
//! ) -> Result<Response, AppError> {
//!     match mode {
//!         ReplyMode::Structured => Ok(Json(JsonReply::success()).into_response()),
//!         ReplyMode::Document => Ok(page.render(&state, View::ThankYou).await?.into_response()),
//!     }
//! }
//! ```

use crate::error::AppError;
use crate::session::VisitorSession;
use crate::state::AppState;
use crate::views::{PageContext, View};
use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Request},
    http::{
        header::{ACCEPT, CONTENT_TYPE},
        request::Parts,
    },
    response::Html,
    Form, Json,
};
use meadowlark_core::{negotiate, ReplyMode};
use serde::de::DeserializeOwned;

/// Header set by script-driven clients.
pub const REQUESTED_WITH_HEADER: &str = "X-Requested-With";

/// Reply mode for this request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Negotiated(pub ReplyMode);

#[async_trait]
impl<S> FromRequestParts<S> for Negotiated
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let headers = &parts.headers;
        let requested_with = headers.get(REQUESTED_WITH_HEADER).and_then(|v| v.to_str().ok());
        let accept = headers.get(ACCEPT).and_then(|v| v.to_str().ok());
        Ok(Self(negotiate(requested_with, accept)))
    }
}

/// A submitted form, accepted as `application/json` or urlencoded.
///
/// Any other body (none at all, `text/plain`, multipart) reads as
/// `T::default()`, so every field is empty. Only a malformed JSON body is
/// rejected.
#[derive(Debug, Clone)]
pub struct Submission<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for Submission<T>
where
    T: DeserializeOwned + Default,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if content_type.starts_with("application/json") {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;
            return Ok(Self(value));
        }

        if content_type.starts_with("application/x-www-form-urlencoded") {
            return match Form::<T>::from_request(req, state).await {
                Ok(Form(value)) => Ok(Self(value)),
                Err(rejection) => {
                    tracing::debug!(reason = %rejection.body_text(), "Unreadable form body");
                    Ok(Self(T::default()))
                }
            };
        }

        tracing::debug!(%content_type, "Unsupported form body, fields read as empty");
        Ok(Self(T::default()))
    }
}

/// Session and page flags for a handler that renders HTML.
#[derive(Debug)]
pub struct Page {
    /// The visitor's session.
    pub visitor: VisitorSession,
    show_tests: bool,
}

impl Page {
    /// Render `view`, consuming the pending flash message.
    ///
    /// The flash is taken before the view is rendered and the session is
    /// saved afterwards, so a message is shown exactly once.
    ///
    /// # Errors
    ///
    /// Returns an internal error if rendering or the session write fails.
    pub async fn render(
        mut self,
        state: &AppState,
        view: View<'_>,
    ) -> Result<Html<String>, AppError> {
        let context = PageContext {
            flash: self.visitor.data.consume_flash(),
            show_tests: self.show_tests,
        };
        let html = state.renderer.render(&view, &context)?;
        self.visitor.save().await?;
        Ok(Html(html))
    }

    /// Whether the browser test harness was requested.
    #[must_use]
    pub const fn show_tests(&self) -> bool {
        self.show_tests
    }
}

#[async_trait]
impl FromRequestParts<AppState> for Page {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let visitor = VisitorSession::from_request_parts(parts, state).await?;
        let show_tests = !state.config.environment.is_production()
            && parts
                .uri
                .query()
                .is_some_and(|query| query.split('&').any(|pair| pair == "test=1"));
        Ok(Self { visitor, show_tests })
    }
}
