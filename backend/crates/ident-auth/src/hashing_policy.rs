//! Argon2id cost parameters.
//!
//! The parameters used for a digest are written in front of it
//! (`m=19456,t=2,p=1$<digest>`), so identities hashed under an older policy
//! still verify after the configured policy changes.

use crate::{AuthError, Result as AuthErrorResult};

use std::str::FromStr;

use argon2::Params;

pub const MIN_MEMORY_KIB: u32 = 8;
pub const MAX_MEMORY_KIB: u32 = 1024 * 1024;
pub const DEFAULT_MEMORY_KIB: u32 = 19 * 1024;
pub const MIN_ITERATIONS: u32 = 1;
pub const MAX_ITERATIONS: u32 = 10;
pub const DEFAULT_ITERATIONS: u32 = 2;
pub const MIN_PARALLELISM: u32 = 1;
pub const MAX_PARALLELISM: u32 = 16;
pub const DEFAULT_PARALLELISM: u32 = 1;
pub const DIGEST_LENGTH: usize = 32;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HashingPolicy {
    /// Memory cost in KiB
    pub memory_kib: u32,
    /// Time cost (passes over memory)
    pub iterations: u32,
    /// Lanes
    pub parallelism: u32,
}

impl Default for HashingPolicy {
    fn default() -> Self {
        // OWASP recommended settings for Argon2id
        Self {
            memory_kib: DEFAULT_MEMORY_KIB,
            iterations: DEFAULT_ITERATIONS,
            parallelism: DEFAULT_PARALLELISM,
        }
    }
}

impl HashingPolicy {
    #[must_use]
    pub const fn memory_kib(mut self, kib: u32) -> Self {
        self.memory_kib = kib;
        self
    }

    #[must_use]
    pub const fn iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    #[must_use]
    pub const fn parallelism(mut self, lanes: u32) -> Self {
        self.parallelism = lanes;
        self
    }

    /// True when every cost is inside the supported range and memory covers
    /// the 8 KiB Argon2 needs per lane
    pub const fn within_bounds(&self) -> bool {
        self.memory_kib >= MIN_MEMORY_KIB
            && self.memory_kib <= MAX_MEMORY_KIB
            && self.iterations >= MIN_ITERATIONS
            && self.iterations <= MAX_ITERATIONS
            && self.parallelism >= MIN_PARALLELISM
            && self.parallelism <= MAX_PARALLELISM
            && self.memory_kib >= 8 * self.parallelism
    }

    #[track_caller]
    pub(crate) fn build_params(&self, output_length: usize) -> AuthErrorResult<Params> {
        Params::new(
            self.memory_kib,
            self.iterations,
            self.parallelism,
            Some(output_length),
        )
        .map_err(|e| AuthError::hashing(format!("invalid Argon2 parameters: {}", e)))
    }

    pub(crate) fn to_param_string(self) -> String {
        format!(
            "m={},t={},p={}",
            self.memory_kib, self.iterations, self.parallelism
        )
    }
}

impl FromStr for HashingPolicy {
    type Err = AuthError;

    #[track_caller]
    fn from_str(s: &str) -> AuthErrorResult<Self> {
        let mut memory_kib = None;
        let mut iterations = None;
        let mut parallelism = None;

        for pair in s.split(',') {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| AuthError::corrupt_credential(format!("bad parameter: {}", pair)))?;
            let value: u32 = value.parse().map_err(|_| {
                AuthError::corrupt_credential(format!("bad parameter value: {}", pair))
            })?;

            match key {
                "m" => memory_kib = Some(value),
                "t" => iterations = Some(value),
                "p" => parallelism = Some(value),
                _ => {
                    return Err(AuthError::corrupt_credential(format!(
                        "unknown parameter: {}",
                        key
                    )));
                }
            }
        }

        let policy = match (memory_kib, iterations, parallelism) {
            (Some(memory_kib), Some(iterations), Some(parallelism)) => Self {
                memory_kib,
                iterations,
                parallelism,
            },
            _ => {
                return Err(AuthError::corrupt_credential(format!(
                    "incomplete parameters: {}",
                    s
                )));
            }
        };

        // Stored costs are untrusted input to the allocator
        if !policy.within_bounds() {
            return Err(AuthError::corrupt_credential(format!(
                "parameters out of range: {}",
                s
            )));
        }

        Ok(policy)
    }
}
