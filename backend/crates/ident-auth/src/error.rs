use ident_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Password hashing failed: {message} {location}")]
    Hashing {
        message: String,
        location: ErrorLocation,
    },

    /// Stored salt or digest could not be interpreted
    #[error("Corrupt credential material: {message} {location}")]
    CorruptCredential {
        message: String,
        location: ErrorLocation,
    },

    #[error("Identity store failed: {source} {location}")]
    Store {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },
}

impl AuthError {
    #[track_caller]
    pub fn hashing<S: Into<String>>(message: S) -> Self {
        Self::Hashing {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn corrupt_credential<S: Into<String>>(message: S) -> Self {
        Self::CorruptCredential {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Hashing { .. } => "HASHING_FAILED",
            Self::CorruptCredential { .. } => "CORRUPT_CREDENTIAL",
            Self::Store { .. } => "STORE_FAILED",
        }
    }
}

impl From<CoreError> for AuthError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Store {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, AuthError>;
