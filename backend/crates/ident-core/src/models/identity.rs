//! Identity entity - the persisted user record.

use crate::{PasswordDigest, Salt};

use chrono::{DateTime, SubsecRound, Utc};
use uuid::Uuid;

/// A persisted identity.
///
/// Holds only derived credential material: the plaintext password is dropped
/// once the digest has been computed and never reaches this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    pub id: Uuid,
    pub name: String,
    /// Email as supplied at signup (original casing preserved)
    pub email: String,
    pub salt: Salt,
    pub password_digest: PasswordDigest,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Identity {
    /// Create a new identity from already-validated attributes.
    ///
    /// Timestamps are whole seconds, the precision the store keeps, so a
    /// created identity equals the one read back.
    pub fn new(name: String, email: String, salt: Salt, password_digest: PasswordDigest) -> Self {
        let now = Utc::now().trunc_subsecs(0);
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            salt,
            password_digest,
            created_at: now,
            updated_at: now,
        }
    }

    /// Email in the form used for uniqueness checks and lookups
    pub fn normalized_email(&self) -> String {
        normalize_email(&self.email)
    }
}

/// Normalize an email for uniqueness comparison and lookup.
///
/// Both sides of every comparison go through this function.
pub fn normalize_email(email: &str) -> String {
    email.to_lowercase()
}
