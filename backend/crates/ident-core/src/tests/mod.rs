
use crate::{CoreError, Identity, IdentityStore, Result as CoreErrorResult};

use std::collections::HashSet;

use async_trait::async_trait;
use uuid::Uuid;

/// Store double that only knows which normalized emails are taken
#[derive(Default)]
pub(crate) struct TakenEmails {
    emails: HashSet<String>,
    fail: bool,
}

impl TakenEmails {
    pub(crate) fn with(emails: &[&str]) -> Self {
        Self {
            emails: emails.iter().map(|e| e.to_string()).collect(),
            fail: false,
        }
    }

    pub(crate) fn failing() -> Self {
        Self {
            emails: HashSet::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl IdentityStore for TakenEmails {
    async fn find_by_normalized_email(&self, _: &str) -> CoreErrorResult<Option<Identity>> {
        Ok(None)
    }

    async fn find_by_id(&self, _: Uuid) -> CoreErrorResult<Option<Identity>> {
        Ok(None)
    }

    async fn email_exists(&self, normalized_email: &str) -> CoreErrorResult<bool> {
        if self.fail {
            return Err(CoreError::store("connection refused"));
        }
        Ok(self.emails.contains(normalized_email))
    }

    async fn persist(&self, _: &Identity) -> CoreErrorResult<()> {
        Ok(())
    }
}
