use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_ITERATIONS, DEFAULT_MEMORY_KIB, DEFAULT_PARALLELISM,
    MAX_ITERATIONS, MAX_MEMORY_KIB, MAX_PARALLELISM, MIN_ITERATIONS, MIN_MEMORY_KIB,
    MIN_PARALLELISM,
};

use serde::Deserialize;

/// Argon2id cost parameters for new password digests.
///
/// Existing digests record the parameters they were made with, so changing
/// these only affects identities created afterwards.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HashingConfig {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for HashingConfig {
    fn default() -> Self {
        Self {
            memory_kib: DEFAULT_MEMORY_KIB,
            iterations: DEFAULT_ITERATIONS,
            parallelism: DEFAULT_PARALLELISM,
        }
    }
}

impl HashingConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.memory_kib < MIN_MEMORY_KIB || self.memory_kib > MAX_MEMORY_KIB {
            return Err(ConfigError::hashing(format!(
                "hashing.memory_kib must be {}-{}, got {}",
                MIN_MEMORY_KIB, MAX_MEMORY_KIB, self.memory_kib
            )));
        }

        if self.iterations < MIN_ITERATIONS || self.iterations > MAX_ITERATIONS {
            return Err(ConfigError::hashing(format!(
                "hashing.iterations must be {}-{}, got {}",
                MIN_ITERATIONS, MAX_ITERATIONS, self.iterations
            )));
        }

        if self.parallelism < MIN_PARALLELISM || self.parallelism > MAX_PARALLELISM {
            return Err(ConfigError::hashing(format!(
                "hashing.parallelism must be {}-{}, got {}",
                MIN_PARALLELISM, MAX_PARALLELISM, self.parallelism
            )));
        }

        // Argon2 needs at least 8 KiB per lane
        if self.memory_kib < 8 * self.parallelism {
            return Err(ConfigError::hashing(format!(
                "hashing.memory_kib must be at least 8 x parallelism ({}), got {}",
                8 * self.parallelism,
                self.memory_kib
            )));
        }

        Ok(())
    }
}
