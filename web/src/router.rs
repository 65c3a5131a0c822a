//! Site router.
//!
//! Composes every handler, the static file fallback and the middleware stack
//! into a single Axum router.

use crate::handlers::{self, cart, contest, newsletter, pages, process};
use crate::middleware::error_pages;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    handler::Handler,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};
use tower_sessions::{MemoryStore, SessionManagerLayer};

/// Create the site router.
///
/// # Routes
///
/// - `GET /`, `/about`, `/tours/*`, `/thank-you`, `/error` - content pages
/// - `GET /newsletter`, `POST /newsletter`, `GET /newsletter/archive`
/// - `GET /contest/vacation-photo`, `POST /contest/vacation-photo/:year/:month`
/// - `GET /cart`, `POST /cart/add`, `POST /cart/checkout`
/// - `POST /process`
/// - `GET /data/nursery-rhyme`, `GET /health`
///
/// Anything else is looked up under the public directory, then falls through
/// to the 404 page.
///
/// # Example
///
/// ```rust,ignore
/// let state = AppState::from_config(Config::from_env())?;
/// let app = build_router(state);
/// axum::serve(listener, app).await?;
/// ```
pub fn build_router(state: AppState) -> Router {
    let config = state.config.clone();

    let static_files = ServeDir::new(&config.public_dir)
        .call_fallback_on_method_not_allowed(true)
        .not_found_service(pages::not_found.with_state(state.clone()));

    let sessions =
        SessionManagerLayer::new(MemoryStore::default()).with_secure(config.secure_cookies);

    Router::new()
        .route("/", get(pages::home))
        .route("/about", get(pages::about))
        .route("/tours/hood-river", get(pages::hood_river))
        .route("/tours/oregon-coast", get(pages::oregon_coast))
        .route("/tours/request-group-rate", get(pages::request_group_rate))
        .route("/thank-you", get(pages::thank_you))
        .route("/error", get(pages::error))
        .route("/newsletter", get(pages::newsletter).post(newsletter::subscribe))
        .route("/newsletter/archive", get(pages::newsletter_archive))
        .route("/contest/vacation-photo", get(contest::form))
        .route("/contest/vacation-photo/:year/:month", post(contest::submit))
        .route("/cart", get(cart::show))
        .route("/cart/add", post(cart::add))
        .route("/cart/checkout", post(cart::checkout))
        .route("/process", post(process::process))
        .route("/nursery-rhyme", get(pages::nursery_rhyme_page))
        .route("/data/nursery-rhyme", get(pages::nursery_rhyme))
        .route("/health", get(handlers::health_check))
        .fallback_service(static_files)
        .layer(DefaultBodyLimit::max(config.max_upload_bytes))
        .layer(middleware::from_fn_with_state(state.clone(), error_pages))
        .layer(sessions)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
