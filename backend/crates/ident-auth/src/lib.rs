pub mod create_outcome;
pub mod error;
pub mod hashing_policy;
pub mod identity_service;
pub mod password_hasher;

pub use create_outcome::CreateOutcome;
pub use error::{AuthError, Result};
pub use hashing_policy::HashingPolicy;
pub use identity_service::IdentityService;
pub use password_hasher::PasswordHasher;

#[cfg(test)]
mod tests;
