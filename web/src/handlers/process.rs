//! Generic form processor used by the group-rate form.

use crate::extractors::Negotiated;
use axum::{
    response::{IntoResponse, Redirect, Response},
    Json,
};
use meadowlark_core::{JsonReply, ReplyMode};

/// `POST /process`
///
/// The body is not inspected.
#[allow(clippy::unused_async)]
pub async fn process(Negotiated(mode): Negotiated) -> Response {
    match mode {
        ReplyMode::Structured => Json(JsonReply::success()).into_response(),
        ReplyMode::Document => Redirect::to("/thank-you").into_response(),
    }
}
