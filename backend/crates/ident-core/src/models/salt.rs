use crate::{CoreError, Result as CoreErrorResult};

use std::fmt;

/// Per-identity salt, stored in its encoded text form.
///
/// Never empty: construction from raw text rejects the empty string.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Salt(String);

impl Salt {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl TryFrom<String> for Salt {
    type Error = CoreError;

    #[track_caller]
    fn try_from(encoded: String) -> CoreErrorResult<Self> {
        if encoded.is_empty() {
            return Err(CoreError::validation("salt cannot be empty"));
        }

        Ok(Self(encoded))
    }
}

impl fmt::Debug for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Salt(..)")
    }
}

impl fmt::Display for Salt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
