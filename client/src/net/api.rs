//! REST helpers for the remote login API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `LoginError::Unavailable` since login
//! only happens in the browser.
//!
//! ERROR HANDLING
//! ==============
//! The HTTP status is not consulted. Any JSON body is inspected for the
//! `isFailed` flag; everything else that goes wrong is a transport or parse
//! error.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde_json::Value;

use super::error::{DEFAULT_REJECTION, LoginError};
use super::types::{Credentials, Session};

/// POST `credentials` as JSON to `endpoint` and interpret the reply.
///
/// # Errors
///
/// Returns `LoginError::Rejected` when the server flags the login as failed,
/// and a transport/parse error when no usable JSON body arrives.
pub async fn login(endpoint: &str, credentials: &Credentials) -> Result<Session, LoginError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(endpoint)
            .json(credentials)
            .map_err(|e| LoginError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| LoginError::Transport(e.to_string()))?;
        let body: Value = resp.json().await.map_err(|e| LoginError::Parse(e.to_string()))?;
        interpret_login_body(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (endpoint, credentials);
        Err(LoginError::Unavailable)
    }
}

/// Decide whether a parsed login response is a session or a rejection.
///
/// # Errors
///
/// `Rejected` when `isFailed` is truthy; `Parse` for a `null` body.
pub fn interpret_login_body(body: Value) -> Result<Session, LoginError> {
    if body.is_null() {
        return Err(LoginError::Parse("login response was null".to_owned()));
    }
    if body.get("isFailed").is_some_and(is_truthy) {
        return Err(LoginError::Rejected { message: rejection_message(&body) });
    }
    Ok(Session::new(body))
}

/// Truthy string, number and boolean messages are shown as text; anything
/// else falls back to the default rejection.
fn rejection_message(body: &Value) -> String {
    match body.get("message").filter(|m| is_truthy(m)) {
        Some(Value::String(s)) => s.clone(),
        Some(scalar @ (Value::Number(_) | Value::Bool(_))) => scalar.to_string(),
        _ => DEFAULT_REJECTION.to_owned(),
    }
}

/// JavaScript truthiness of a JSON value.
pub(crate) fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
