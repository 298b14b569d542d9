//! Salted password hashing using Argon2id.
//!
//! - Salt: 16 bytes from the thread-local CSPRNG, base64 encoded
//! - Digest: Argon2id(password, salt) with the policy recorded alongside it
//! - Verification recomputes the digest and compares in constant time

use crate::{AuthError, HashingPolicy, Result as AuthErrorResult};
use crate::hashing_policy::DIGEST_LENGTH;

use ident_core::{PasswordDigest, Salt};

use argon2::{Algorithm, Argon2, Version};
use base64::Engine;
use base64::engine::general_purpose::STANDARD_NO_PAD;
use rand::RngCore;
use subtle::ConstantTimeEq;

const SALT_LENGTH: usize = 16;
const PARAMS_SEPARATOR: char = '$';

pub struct PasswordHasher {
    policy: HashingPolicy,
}

impl PasswordHasher {
    pub fn new(policy: HashingPolicy) -> Self {
        Self { policy }
    }

    pub fn with_defaults() -> Self {
        Self::new(HashingPolicy::default())
    }

    pub fn policy(&self) -> HashingPolicy {
        self.policy
    }

    /// Produce a fresh random salt
    #[track_caller]
    pub fn generate_salt(&self) -> AuthErrorResult<Salt> {
        let mut bytes = [0u8; SALT_LENGTH];
        rand::rng().fill_bytes(&mut bytes);

        Salt::try_from(STANDARD_NO_PAD.encode(bytes))
            .map_err(|e| AuthError::hashing(format!("salt generation failed: {}", e)))
    }

    /// Deterministic digest of `(salt, password)` under the current policy
    #[track_caller]
    pub fn digest(&self, salt: &Salt, password: &str) -> AuthErrorResult<PasswordDigest> {
        let raw = Self::compute(&self.policy, salt, password, DIGEST_LENGTH)?;
        let encoded = format!(
            "{}{}{}",
            self.policy.to_param_string(),
            PARAMS_SEPARATOR,
            STANDARD_NO_PAD.encode(raw)
        );

        PasswordDigest::try_from(encoded).map_err(|e| AuthError::hashing(e.to_string()))
    }

    /// True iff `candidate` hashes to `digest` under `salt`.
    ///
    /// The comparison does not short-circuit on the first differing byte.
    #[track_caller]
    pub fn verify(
        &self,
        salt: &Salt,
        digest: &PasswordDigest,
        candidate: &str,
    ) -> AuthErrorResult<bool> {
        let (params, encoded) = digest
            .as_str()
            .split_once(PARAMS_SEPARATOR)
            .ok_or_else(|| AuthError::corrupt_credential("digest has no parameter section"))?;

        let policy: HashingPolicy = params.parse()?;
        let expected = STANDARD_NO_PAD
            .decode(encoded)
            .map_err(|e| AuthError::corrupt_credential(format!("digest is not base64: {}", e)))?;
        if expected.len() != DIGEST_LENGTH {
            return Err(AuthError::corrupt_credential(format!(
                "digest is {} bytes, expected {}",
                expected.len(),
                DIGEST_LENGTH
            )));
        }

        let actual = Self::compute(&policy, salt, candidate, expected.len())?;

        Ok(actual.as_slice().ct_eq(expected.as_slice()).into())
    }

    #[track_caller]
    fn compute(
        policy: &HashingPolicy,
        salt: &Salt,
        password: &str,
        output_length: usize,
    ) -> AuthErrorResult<Vec<u8>> {
        let params = policy.build_params(output_length)?;
        let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

        let mut output = vec![0u8; output_length];
        argon2
            .hash_password_into(password.as_bytes(), salt.as_bytes(), &mut output)
            .map_err(|e| AuthError::hashing(e.to_string()))?;

        Ok(output)
    }
}
