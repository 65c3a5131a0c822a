//! Bridge between the cookie session store and [`SessionData`].
//!
//! Everything the site keeps for a visitor lives under one key in the
//! `tower-sessions` record. A [`VisitorSession`] loads it once per request and
//! writes it back only when a handler changed it, so plain page views by new
//! visitors never mint a session cookie.

use crate::error::AppError;
use axum::{async_trait, extract::FromRequestParts, http::request::Parts};
use meadowlark_core::SessionData;
use tower_sessions::Session;

/// Key under which [`SessionData`] is stored.
pub const SESSION_KEY: &str = "meadowlark";

/// The visitor's session, loaded for one request.
#[derive(Debug)]
pub struct VisitorSession {
    session: Session,
    loaded: SessionData,
    /// Working copy; handlers mutate this.
    pub data: SessionData,
}

impl VisitorSession {
    /// Load the typed session data from `session`.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the store cannot be read.
    pub async fn load(session: Session) -> Result<Self, AppError> {
        let data: SessionData = session.get(SESSION_KEY).await?.unwrap_or_default();
        Ok(Self {
            session,
            loaded: data.clone(),
            data,
        })
    }

    /// Write the working copy back if it changed since it was loaded.
    ///
    /// # Errors
    ///
    /// Returns an internal error if the store cannot be written.
    pub async fn save(&mut self) -> Result<(), AppError> {
        if self.data == self.loaded {
            return Ok(());
        }
        self.session.insert(SESSION_KEY, &self.data).await?;
        self.loaded = self.data.clone();
        Ok(())
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for VisitorSession
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Only fails when the session layer is missing from the stack.
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, reason)| AppError::from(anyhow::anyhow!(reason)))?;
        Self::load(session).await
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)] // Test code can use unwrap
mod tests {
    use super::*;
    use meadowlark_core::FlashMessage;
    use std::sync::Arc;
    use tower_sessions::MemoryStore;

    fn session() -> Session {
        Session::new(None, Arc::new(MemoryStore::default()), None)
    }

    #[tokio::test]
    async fn test_fresh_session_loads_empty_data() {
        let visitor = VisitorSession::load(session()).await.unwrap();
        assert_eq!(visitor.data, SessionData::default());
    }

    #[tokio::test]
    async fn test_save_round_trips_changes() {
        let session = session();
        let mut visitor = VisitorSession::load(session.clone()).await.unwrap();
        visitor.data.set_flash(FlashMessage::success("Thank you!", "Signed up."));
        visitor.save().await.unwrap();

        let mut reloaded = VisitorSession::load(session).await.unwrap();
        assert!(reloaded.data.consume_flash().is_some());
    }

    #[tokio::test]
    async fn test_unchanged_data_is_not_written() {
        let session = session();
        let mut visitor = VisitorSession::load(session.clone()).await.unwrap();
        visitor.save().await.unwrap();
        assert!(session.is_empty().await);
    }
}
