//! Per-section fetch status.

#[cfg(test)]
#[path = "loadable_test.rs"]
mod loadable_test;

use crate::net::error::ApiError;

/// Explicit status of one asynchronous fetch.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Loadable<T> {
    /// Nothing requested (e.g. no user to fetch for).
    Idle,
    Loading,
    Loaded(T),
    /// Terminal failure with a message ready for inline display.
    Failed(String),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<T> Loadable<T> {
    /// Map a fetch result, replacing error details with `fallback` unless the
    /// server supplied its own message.
    pub fn from_result(result: Result<T, ApiError>, fallback: &str) -> Self {
        match result {
            Ok(value) => Self::Loaded(value),
            Err(err) => Self::Failed(err.user_message(fallback)),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Loadable<U> {
        match self {
            Self::Idle => Loadable::Idle,
            Self::Loading => Loadable::Loading,
            Self::Loaded(value) => Loadable::Loaded(f(value)),
            Self::Failed(message) => Loadable::Failed(message),
        }
    }
}
