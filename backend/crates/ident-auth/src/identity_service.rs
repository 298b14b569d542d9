//! Signup and login flows over an [`IdentityStore`].

use crate::{CreateOutcome, PasswordHasher, Result as AuthErrorResult};

use ident_core::{
    CredentialValidator, Field, FieldError, Identity, IdentityStore, NewIdentity, Salt,
    ValidationErrorKind, ValidationReport, normalize_email,
};

use log::{debug, info, warn};
use uuid::Uuid;

pub struct IdentityService<S> {
    store: S,
    hasher: PasswordHasher,
    /// Hashed against when the email is unknown, so both no-match paths cost
    /// one digest computation
    decoy_salt: Salt,
}

impl<S: IdentityStore> IdentityService<S> {
    pub fn new(store: S, hasher: PasswordHasher) -> AuthErrorResult<Self> {
        let decoy_salt = hasher.generate_salt()?;

        Ok(Self {
            store,
            hasher,
            decoy_salt,
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn hasher(&self) -> &PasswordHasher {
        &self.hasher
    }

    /// Validate, hash and persist a proposed identity.
    ///
    /// The candidate is consumed; its plaintext password is dropped when this
    /// returns. Store faults are errors, everything else is a `CreateOutcome`.
    pub async fn create_identity(&self, candidate: NewIdentity) -> AuthErrorResult<CreateOutcome> {
        let report = CredentialValidator::validate(&candidate, &self.store).await?;

        if !report.is_valid() {
            info!(
                "Signup rejected for {}: {}",
                candidate.email,
                report.codes().join(", ")
            );
            return Ok(CreateOutcome::Invalid(report));
        }

        let salt = self.hasher.generate_salt()?;
        let password_digest = self.hasher.digest(&salt, &candidate.password)?;

        let NewIdentity { name, email, .. } = candidate;
        let identity = Identity::new(name, email, salt, password_digest);

        match self.store.persist(&identity).await {
            Ok(()) => {
                info!("Identity created: {} <{}>", identity.id, identity.email);
                Ok(CreateOutcome::Created(identity))
            }
            Err(e) if e.is_conflict() => {
                warn!(
                    "Signup for {} lost a race on the unique email constraint",
                    identity.email
                );
                Ok(CreateOutcome::Conflict(ValidationReport::from(
                    FieldError::new(Field::Email, ValidationErrorKind::Taken),
                )))
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Return the identity matching `email` and `password`, or `None`.
    ///
    /// Unknown email and wrong password give the same `Ok(None)`.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> AuthErrorResult<Option<Identity>> {
        let normalized = normalize_email(email);

        let Some(identity) = self.store.find_by_normalized_email(&normalized).await? else {
            self.hasher.digest(&self.decoy_salt, password)?;
            debug!("Authentication failed for {}", normalized);
            return Ok(None);
        };

        if self
            .hasher
            .verify(&identity.salt, &identity.password_digest, password)?
        {
            debug!("Authenticated identity {}", identity.id);
            Ok(Some(identity))
        } else {
            debug!("Authentication failed for {}", normalized);
            Ok(None)
        }
    }

    /// Check a plaintext password against an already loaded identity
    pub fn has_password(&self, identity: &Identity, candidate: &str) -> AuthErrorResult<bool> {
        self.hasher
            .verify(&identity.salt, &identity.password_digest, candidate)
    }

    pub async fn find_by_id(&self, id: Uuid) -> AuthErrorResult<Option<Identity>> {
        Ok(self.store.find_by_id(id).await?)
    }
}
