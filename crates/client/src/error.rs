//! Client-side error taxonomy.

use thiserror::Error;

use campus_auth::AuthzError;
use campus_core::FieldErrors;

/// Everything that can go wrong in an orchestrated operation.
///
/// `Denied` and `Validation` are produced locally before any network call;
/// `SessionExpired` means the caller should redirect to the login screen;
/// `Backend` and `Transport` come back from the gateway. None of these are
/// fatal — the session stays usable after any of them.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// The authorization policy denied the action locally.
    #[error("denied: {0}")]
    Denied(#[from] AuthzError),

    /// Local validation (or a backend 422) produced field errors.
    #[error("validation failed: {0}")]
    Validation(FieldErrors),

    /// No token is available for a gated operation.
    #[error("session expired")]
    SessionExpired,

    /// The backend rejected the request with a non-422 error status.
    #[error("backend rejected the request (status {status})")]
    Backend { status: u16 },

    /// The request never completed (connection, timeout, decode).
    #[error("transport failure: {0}")]
    Transport(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => ClientError::Backend {
                status: status.as_u16(),
            },
            None => ClientError::Transport(err.to_string()),
        }
    }
}
