use std::fmt;

use serde::Deserialize;

/// Proposed attributes for a new identity, as submitted by a signup form.
///
/// Exists only in memory. The password fields are transient and are redacted
/// from `Debug` output so the value can be logged safely.
#[derive(Clone, Default, Deserialize)]
#[serde(default)]
pub struct NewIdentity {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirmation: String,
}

impl NewIdentity {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        password_confirmation: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            password_confirmation: password_confirmation.into(),
        }
    }
}

impl fmt::Debug for NewIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewIdentity")
            .field("name", &self.name)
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .field("password_confirmation", &"[REDACTED]")
            .finish()
    }
}
