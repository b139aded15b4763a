//! Failure taxonomy for backend calls.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The request never produced a response (network, CORS, body encoding).
    #[error("request failed: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status.
    #[error("server responded with status {status}")]
    Status { status: u16, message: Option<String> },
    /// A 2xx response whose body did not match the expected schema.
    #[error("unexpected response body: {0}")]
    Decode(String),
    /// The backend accepted the request but refused the operation.
    #[error("{0}")]
    Rejected(String),
    /// No browser transport is compiled in.
    #[error("not available outside the browser")]
    Unavailable,
}

impl ApiError {
    /// Message suitable for inline display.
    ///
    /// Server-provided explanations win; otherwise `fallback` is shown so raw
    /// transport details never reach the page.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Status { message: Some(message), .. } if !message.trim().is_empty() => message.clone(),
            Self::Rejected(message) if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_owned(),
        }
    }

    /// `true` for a 404 response.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Status { status: 404, .. })
    }
}
