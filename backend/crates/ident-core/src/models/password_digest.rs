use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;

/// Encoded one-way digest of (salt, password).
#[derive(Clone, PartialEq, Eq)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PasswordDigest {
    type Error = CoreError;

    #[track_caller]
    fn try_from(encoded: String) -> CoreErrorResult<Self> {
        if encoded.is_empty() {
            return Err(CoreError::validation("password digest cannot be empty"));
        }

        Ok(Self(encoded))
    }
}

impl fmt::Debug for PasswordDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PasswordDigest(..)")
    }
}
