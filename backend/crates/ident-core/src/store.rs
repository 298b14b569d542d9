//! Narrow interface to the durable identity store.

use crate::{Identity, Result as CoreErrorResult};

use async_trait::async_trait;
use uuid::Uuid;

/// Record access the identity flows need from persistence.
///
/// Emails passed in must already be normalized with [`crate::normalize_email`].
/// `persist` returns `CoreError::EmailTaken` when the store's own uniqueness
/// constraint rejects the write and `CoreError::Store` for any other fault.
#[async_trait]
pub trait IdentityStore: Send + Sync {
    async fn find_by_normalized_email(
        &self,
        normalized_email: &str,
    ) -> CoreErrorResult<Option<Identity>>;

    async fn find_by_id(&self, id: Uuid) -> CoreErrorResult<Option<Identity>>;

    async fn email_exists(&self, normalized_email: &str) -> CoreErrorResult<bool>;

    async fn persist(&self, identity: &Identity) -> CoreErrorResult<()>;
}
