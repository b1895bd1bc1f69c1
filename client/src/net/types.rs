//! Wire DTOs for the login API boundary.
//!
//! DESIGN
//! ======
//! The server's login payload is kept verbatim as an opaque JSON value so the
//! copy persisted in session storage is exactly what the API returned.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Login form credentials, serialized as the JSON request body.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Server-issued session payload from a successful login.
///
/// Treated as opaque beyond a few optional display fields.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Session(pub serde_json::Value);

impl Session {
    #[must_use]
    pub fn new(value: serde_json::Value) -> Self {
        Self(value)
    }

    /// Raw JSON payload as returned by the server.
    #[must_use]
    pub fn payload(&self) -> &serde_json::Value {
        &self.0
    }

    /// Best-effort label for the signed-in account, for layout headers.
    ///
    /// Looks at common top-level fields, then one level into a `data` or
    /// `user` envelope.
    #[must_use]
    pub fn display_name(&self) -> Option<String> {
        fn pick(value: &serde_json::Value) -> Option<String> {
            ["name", "fullName", "userName", "email"].iter().find_map(|key| {
                value
                    .get(key)
                    .and_then(serde_json::Value::as_str)
                    .map(str::trim)
                    .filter(|s| !s.is_empty())
                    .map(str::to_owned)
            })
        }

        pick(&self.0).or_else(|| {
            ["data", "user"]
                .iter()
                .filter_map(|key| self.0.get(key))
                .find_map(pick)
        })
    }
}
