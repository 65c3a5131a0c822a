//! Plain content pages.
//!
//! Each handler renders one view through [`Page`], which consumes the flash.

use crate::error::AppError;
use crate::extractors::Page;
use crate::state::AppState;
use crate::views::View;
use crate::WebResult;
use axum::{extract::State, http::StatusCode, response::Html, Json};
use serde::Serialize;

type PageResult = WebResult<Html<String>>;

/// `GET /`
pub async fn home(State(state): State<AppState>, page: Page) -> PageResult {
    page.render(&state, View::Home).await
}

/// `GET /about`
pub async fn about(State(state): State<AppState>, page: Page) -> PageResult {
    page.render(&state, View::About).await
}

/// `GET /tours/hood-river`
pub async fn hood_river(State(state): State<AppState>, page: Page) -> PageResult {
    page.render(&state, View::HoodRiver).await
}

/// `GET /tours/oregon-coast`
pub async fn oregon_coast(State(state): State<AppState>, page: Page) -> PageResult {
    page.render(&state, View::OregonCoast).await
}

/// `GET /tours/request-group-rate`
pub async fn request_group_rate(State(state): State<AppState>, page: Page) -> PageResult {
    page.render(&state, View::RequestGroupRate).await
}

/// `GET /thank-you`
pub async fn thank_you(State(state): State<AppState>, page: Page) -> PageResult {
    page.render(&state, View::ThankYou).await
}

/// `GET /error`: the generic failure page, served with 200.
pub async fn error(State(state): State<AppState>, page: Page) -> PageResult {
    page.render(&state, View::Error).await
}

/// `GET /newsletter`
pub async fn newsletter(State(state): State<AppState>, page: Page) -> PageResult {
    page.render(&state, View::Newsletter).await
}

/// `GET /newsletter/archive`
pub async fn newsletter_archive(State(state): State<AppState>, page: Page) -> PageResult {
    page.render(&state, View::NewsletterArchive).await
}

/// Fallback for paths no route or static file claims.
pub async fn not_found(
    State(state): State<AppState>,
    page: Page,
) -> Result<(StatusCode, Html<String>), AppError> {
    let html = page.render(&state, View::NotFound).await?;
    Ok((StatusCode::NOT_FOUND, html))
}

/// `GET /nursery-rhyme`
pub async fn nursery_rhyme_page(State(state): State<AppState>, page: Page) -> PageResult {
    page.render(&state, View::NurseryRhyme).await
}

/// Words for the nursery-rhyme page script.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NurseryRhyme {
    animal: &'static str,
    body_part: &'static str,
    adjective: &'static str,
    noun: &'static str,
}

/// `GET /data/nursery-rhyme`
#[allow(clippy::unused_async)]
pub async fn nursery_rhyme() -> Json<NurseryRhyme> {
    Json(NurseryRhyme {
        animal: "squirrel",
        body_part: "tail",
        adjective: "bushy",
        noun: "heck",
    })
}
