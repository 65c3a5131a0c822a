//! Newsletter signup.

use crate::error::AppError;
use crate::extractors::{Negotiated, Submission};
use crate::session::VisitorSession;
use crate::state::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use meadowlark_core::{newsletter, NewsletterSignup, ReplyMode, SignupOutcome};
use serde::Deserialize;

/// Where browsers land after submitting the signup form.
pub const ARCHIVE_PATH: &str = "/newsletter/archive";

/// Signup form fields. Missing fields read as empty.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SignupForm {
    /// Subscriber name.
    #[serde(default)]
    pub name: String,
    /// Subscriber email.
    #[serde(default)]
    pub email: String,
}

/// `POST /newsletter`
///
/// Script clients get a JSON verdict. Browsers get a flash message and a
/// redirect to the archive, whatever the outcome.
///
/// # Errors
///
/// Only fails if the session cannot be written.
pub async fn subscribe(
    State(state): State<AppState>,
    Negotiated(mode): Negotiated,
    mut visitor: VisitorSession,
    Submission(form): Submission<SignupForm>,
) -> Result<Response, AppError> {
    let signup = NewsletterSignup {
        name: form.name,
        email: form.email,
    };
    let outcome = newsletter::subscribe(state.signups.as_ref(), signup).await;

    match &outcome {
        SignupOutcome::Subscribed => {
            metrics::counter!("meadowlark.newsletter.signups").increment(1);
            tracing::info!("Newsletter signup stored");
        }
        SignupOutcome::SaveFailed(error) => {
            tracing::warn!(%error, "Newsletter signup could not be saved");
        }
        SignupOutcome::Invalid { reason } => tracing::debug!(%reason, "Newsletter signup rejected"),
    }

    match mode {
        ReplyMode::Structured => Ok(Json(outcome.json()).into_response()),
        ReplyMode::Document => {
            visitor.data.set_flash(outcome.flash());
            visitor.save().await?;
            Ok(Redirect::to(ARCHIVE_PATH).into_response())
        }
    }
}
