//! Newsletter signups.
//!
//! [`subscribe`] runs the whole signup decision: validate, then make exactly
//! one save attempt. The caller turns the resulting [`SignupOutcome`] into a
//! JSON body or a flash message plus redirect, depending on how the visitor
//! asked.

use crate::flash::FlashMessage;
use crate::reply::JsonReply;
use crate::validation::{validate_email, Validation};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A visitor asking to receive the newsletter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSignup {
    /// Name as submitted, possibly empty.
    pub name: String,
    /// Email address as submitted.
    pub email: String,
}

/// The signup could not be stored.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("failed to save signup: {0}")]
pub struct SaveError(pub String);

/// Where signups are kept.
#[async_trait]
pub trait SignupRepository: Send + Sync {
    /// Persist `signup`.
    ///
    /// # Errors
    ///
    /// Returns [`SaveError`] if the backing store rejects the write.
    async fn save(&self, signup: &NewsletterSignup) -> Result<(), SaveError>;
}

/// Repository that accepts every signup and keeps none of them.
///
/// Used until a real mailing-list store is configured, so repeated signups
/// cost nothing to hold.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSignupRepository;

#[async_trait]
impl SignupRepository for NoopSignupRepository {
    async fn save(&self, _signup: &NewsletterSignup) -> Result<(), SaveError> {
        Ok(())
    }
}

/// How a signup attempt ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignupOutcome {
    /// The email failed validation; nothing was saved.
    Invalid {
        /// Validator's reason.
        reason: String,
    },
    /// The save attempt failed.
    SaveFailed(SaveError),
    /// The signup was stored.
    Subscribed,
}

impl SignupOutcome {
    /// Returns `true` for [`SignupOutcome::Subscribed`].
    #[must_use]
    pub const fn is_subscribed(&self) -> bool {
        matches!(self, Self::Subscribed)
    }

    /// Body for a script-driven client.
    #[must_use]
    pub fn json(&self) -> JsonReply {
        match self {
            Self::Invalid { .. } => JsonReply::error("Invalid name email address."),
            Self::SaveFailed(_) => JsonReply::error("Database error."),
            Self::Subscribed => JsonReply::success(),
        }
    }

    /// Flash message for a browser that will be redirected.
    #[must_use]
    pub fn flash(&self) -> FlashMessage {
        match self {
            Self::Invalid { .. } => FlashMessage::danger(
                "Validation error!",
                "The email address you entered was not valid.",
            ),
            Self::SaveFailed(_) => FlashMessage::danger(
                "Database error!",
                "There was a database error; please try again later.",
            ),
            Self::Subscribed => FlashMessage::success(
                "Thank you!",
                "You have now been signed up for the newsletter.",
            ),
        }
    }
}

/// Validate `signup` and, if it passes, save it once.
///
/// Invalid input never reaches the repository. A failed save is not retried.
pub async fn subscribe(
    repository: &dyn SignupRepository,
    signup: NewsletterSignup,
) -> SignupOutcome {
    if let Validation::Invalid(reason) = validate_email(&signup.email) {
        return SignupOutcome::Invalid { reason };
    }

    match repository.save(&signup).await {
        Ok(()) => SignupOutcome::Subscribed,
        Err(err) => SignupOutcome::SaveFailed(err),
    }
}
