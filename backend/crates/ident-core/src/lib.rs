pub mod error;
pub mod models;
pub mod store;
pub mod validation;

pub use error::{CoreError, Result};
pub use error_location::ErrorLocation;
pub use models::identity::{Identity, normalize_email};
pub use models::new_identity::NewIdentity;
pub use models::password_digest::PasswordDigest;
pub use models::salt::Salt;
pub use store::IdentityStore;
pub use validation::credential_validator::{
    CredentialValidator, MAX_NAME_LENGTH, MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH,
};
pub use validation::field::Field;
pub use validation::field_error::FieldError;
pub use validation::validation_error_kind::ValidationErrorKind;
pub use validation::validation_report::ValidationReport;

#[cfg(test)]
mod tests;
