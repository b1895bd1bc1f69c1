//! Login error taxonomy.
//!
//! ERROR HANDLING
//! ==============
//! Only an application-level rejection carries text meant for the user. Every
//! other failure collapses to one generic message at the view boundary; its
//! detail goes to the console log.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use crate::util::session_store::StorageError;

/// Message shown for transport, parse and storage failures.
pub const GENERIC_LOGIN_ERROR: &str = "An unexpected error occurred.";

/// Fallback when the server rejects a login without a usable message.
pub const DEFAULT_REJECTION: &str = "Login failed.";

/// Errors produced by a login attempt.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// The server flagged the credentials as rejected.
    #[error("login rejected: {message}")]
    Rejected { message: String },

    /// The request could not be built or sent.
    #[error("login request failed: {0}")]
    Transport(String),

    /// The response body was not usable JSON.
    #[error("login response parse failed: {0}")]
    Parse(String),

    /// The session could not be persisted after a successful login.
    #[error("session persist failed: {0}")]
    Storage(#[from] StorageError),

    /// Login was attempted outside the browser.
    #[error("login not available on server")]
    Unavailable,
}

impl LoginError {
    /// Text safe to display in the login form.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Rejected { message } => message.clone(),
            _ => GENERIC_LOGIN_ERROR.to_owned(),
        }
    }

    /// Whether the failure is diagnostic-worthy (anything but a rejection).
    #[must_use]
    pub fn is_unexpected(&self) -> bool {
        !matches!(self, Self::Rejected { .. })
    }
}
