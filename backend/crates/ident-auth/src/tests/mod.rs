mod hashing_policy;

use crate::{HashingPolicy, IdentityService, PasswordHasher};

use ident_core::{CoreError, Identity, IdentityStore, Result as CoreErrorResult};

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

/// Cheap parameters so tests don't spend 19 MiB per hash
pub(crate) fn fast_policy() -> HashingPolicy {
    HashingPolicy::default().memory_kib(1024).iterations(1)
}

pub(crate) fn fast_hasher() -> PasswordHasher {
    PasswordHasher::new(fast_policy())
}

pub(crate) fn service_with<S: IdentityStore>(store: S) -> IdentityService<S> {
    IdentityService::new(store, fast_hasher()).unwrap()
}

/// In-memory store enforcing the unique normalized-email constraint on write
#[derive(Default)]
pub(crate) struct MemoryStore {
    identities: Mutex<HashMap<Uuid, Identity>>,
}

impl MemoryStore {
    pub(crate) fn count(&self) -> usize {
        self.identities.lock().unwrap().len()
    }
}

#[async_trait]
impl IdentityStore for MemoryStore {
    async fn find_by_normalized_email(
        &self,
        normalized_email: &str,
    ) -> CoreErrorResult<Option<Identity>> {
        let identities = self.identities.lock().unwrap();
        Ok(identities
            .values()
            .find(|i| i.normalized_email() == normalized_email)
            .cloned())
    }

    async fn find_by_id(&self, id: Uuid) -> CoreErrorResult<Option<Identity>> {
        Ok(self.identities.lock().unwrap().get(&id).cloned())
    }

    async fn email_exists(&self, normalized_email: &str) -> CoreErrorResult<bool> {
        let identities = self.identities.lock().unwrap();
        Ok(identities
            .values()
            .any(|i| i.normalized_email() == normalized_email))
    }

    async fn persist(&self, identity: &Identity) -> CoreErrorResult<()> {
        let mut identities = self.identities.lock().unwrap();
        let normalized = identity.normalized_email();
        if identities
            .values()
            .any(|i| i.normalized_email() == normalized)
        {
            return Err(CoreError::email_taken(identity.email.clone()));
        }
        identities.insert(identity.id, identity.clone());
        Ok(())
    }
}

/// Store whose pre-check never sees the competing row, as when two signups
/// for the same email interleave
#[derive(Default)]
pub(crate) struct RacingStore {
    pub(crate) inner: MemoryStore,
}

#[async_trait]
impl IdentityStore for RacingStore {
    async fn find_by_normalized_email(
        &self,
        normalized_email: &str,
    ) -> CoreErrorResult<Option<Identity>> {
        self.inner.find_by_normalized_email(normalized_email).await
    }

    async fn find_by_id(&self, id: Uuid) -> CoreErrorResult<Option<Identity>> {
        self.inner.find_by_id(id).await
    }

    async fn email_exists(&self, _: &str) -> CoreErrorResult<bool> {
        Ok(false)
    }

    async fn persist(&self, identity: &Identity) -> CoreErrorResult<()> {
        self.inner.persist(identity).await
    }
}

/// Store that is unreachable
pub(crate) struct BrokenStore;

#[async_trait]
impl IdentityStore for BrokenStore {
    async fn find_by_normalized_email(&self, _: &str) -> CoreErrorResult<Option<Identity>> {
        Err(CoreError::store("database is locked"))
    }

    async fn find_by_id(&self, _: Uuid) -> CoreErrorResult<Option<Identity>> {
        Err(CoreError::store("database is locked"))
    }

    async fn email_exists(&self, _: &str) -> CoreErrorResult<bool> {
        Err(CoreError::store("database is locked"))
    }

    async fn persist(&self, _: &Identity) -> CoreErrorResult<()> {
        Err(CoreError::store("database is locked"))
    }
}
