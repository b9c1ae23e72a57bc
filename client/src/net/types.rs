//! Wire DTOs for the authentication endpoint.
//!
//! DESIGN
//! ======
//! The endpoint owns the shape of the user object. Only `session_id` is
//! interpreted here; every other field is carried through untouched so pages
//! can read what they need without this module tracking schema changes.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Login form payload as submitted to the authentication endpoint.
///
/// Exists only for the duration of one submission and is never persisted.
#[derive(Clone, Default, PartialEq, Eq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
    /// Collected and forwarded; the client applies no extra behavior for it.
    #[serde(rename = "rememberMe")]
    pub remember_me: bool,
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("remember_me", &self.remember_me)
            .finish()
    }
}

/// User object returned by a successful login.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthUser {
    /// Opaque session identifier persisted in the session cookie.
    pub session_id: String,
    /// Remaining server-provided fields, kept verbatim.
    #[serde(flatten)]
    pub profile: serde_json::Map<String, serde_json::Value>,
}

impl AuthUser {
    /// Look up a string-valued profile field.
    pub fn profile_str(&self, key: &str) -> Option<&str> {
        self.profile.get(key).and_then(serde_json::Value::as_str)
    }
}
