//! Error-page boundary.
//!
//! Handlers fail by returning [`AppError`](crate::AppError), whose response
//! carries a plain-text message and an [`ErrorPage`] marker. This middleware
//! swaps that body for the rendered `404`, `500` or generic error view, so
//! visitors always get a site page and never an internal detail.
//!
//! # Example
//!
//! ```ignore
//! let app = Router::new()
//!     .route("/cart/checkout", post(checkout))
//!     .layer(middleware::from_fn_with_state(state.clone(), error_pages))
//!     .with_state(state);
//! ```

use crate::error::ErrorPage;
use crate::state::AppState;
use crate::views::{PageContext, View};
use axum::{
    extract::{Request, State},
    http::StatusCode,
    middleware::Next,
    response::{Html, IntoResponse, Response},
};

/// Render an error page for any response tagged with [`ErrorPage`].
pub async fn error_pages(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let response = next.run(request).await;
    if response.extensions().get::<ErrorPage>().is_none() {
        return response;
    }

    let status = response.status();
    let view = match status {
        StatusCode::NOT_FOUND => View::NotFound,
        s if s.is_server_error() => View::ServerError,
        _ => View::Error,
    };

    match state.renderer.render(&view, &PageContext::default()) {
        Ok(html) => (status, Html(html)).into_response(),
        Err(error) => {
            tracing::error!(%error, "Failed to render error page");
            response
        }
    }
}
