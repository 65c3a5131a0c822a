//! Test doubles for the core collaborators.

use crate::newsletter::{NewsletterSignup, SaveError, SignupRepository};
use async_trait::async_trait;
use std::sync::{Arc, Mutex};

/// In-memory repository.
///
/// Accepts every signup by default. [`InMemorySignupRepository::failing`]
/// builds one that rejects every write, for exercising the error path.
#[derive(Debug, Clone, Default)]
pub struct InMemorySignupRepository {
    signups: Arc<Mutex<Vec<NewsletterSignup>>>,
    attempts: Arc<Mutex<usize>>,
    fail: bool,
}

impl InMemorySignupRepository {
    /// Create an empty repository that accepts every signup.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository whose saves always fail.
    #[must_use]
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Signups stored so far.
    #[must_use]
    pub fn signups(&self) -> Vec<NewsletterSignup> {
        self.signups
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Number of save attempts, successful or not.
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.attempts.lock().map(|guard| *guard).unwrap_or_default()
    }
}

#[async_trait]
impl SignupRepository for InMemorySignupRepository {
    async fn save(&self, signup: &NewsletterSignup) -> Result<(), SaveError> {
        {
            let mut attempts = self
                .attempts
                .lock()
                .map_err(|_| SaveError("attempt counter poisoned".to_string()))?;
            *attempts += 1;
        }

        if self.fail {
            return Err(SaveError("store unavailable".to_string()));
        }

        self.signups
            .lock()
            .map_err(|_| SaveError("signup list poisoned".to_string()))?
            .push(signup.clone());
        Ok(())
    }
}
