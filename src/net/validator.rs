//! Fail-closed session validation.
//!
//! SYSTEM CONTEXT
//! ==============
//! The route guard asks exactly one question per path: is this session still
//! valid? [`SessionValidator`] is the backend seam (real HTTP in the app, a
//! fake in tests); [`validate`] owns the policy around it.
//!
//! ERROR HANDLING
//! ==============
//! Every failure mode (transport, non-2xx, malformed body) collapses to
//! `false`. Nothing is retried and no error escapes to the guard.

#[cfg(test)]
#[path = "validator_test.rs"]
mod validator_test;

use async_trait::async_trait;

use super::error::ApiError;
use crate::state::session::Session;

/// One backend round trip answering whether `session` is accepted.
#[async_trait(?Send)]
pub trait SessionValidator: Send + Sync {
    /// # Errors
    ///
    /// Returns the transport or decoding failure; callers treat any error as
    /// a rejection.
    async fn check(&self, session: &Session) -> Result<bool, ApiError>;
}

/// `true` only when the backend affirmatively accepts a complete session.
///
/// A session with a blank field is rejected without calling `validator`.
pub async fn validate(validator: &dyn SessionValidator, session: &Session) -> bool {
    if !session.is_complete() {
        log::debug!("session validation skipped: incomplete session");
        return false;
    }
    match validator.check(session).await {
        Ok(valid) => {
            log::debug!("session validation answered valid={valid}");
            valid
        }
        Err(err) => {
            log::warn!("session validation failed, treating as invalid: {err}");
            false
        }
    }
}
