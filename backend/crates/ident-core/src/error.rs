use crate::ErrorLocation;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Validation error: {message} {location}")]
    Validation {
        message: String,
        location: ErrorLocation,
    },

    /// The store refused a write because the normalized email already exists.
    #[error("Email already taken: {email} {location}")]
    EmailTaken {
        email: String,
        location: ErrorLocation,
    },

    #[error("Store error: {message} {location}")]
    Store {
        message: String,
        location: ErrorLocation,
    },
}

impl CoreError {
    #[track_caller]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn email_taken<S: Into<String>>(email: S) -> Self {
        Self::EmailTaken {
            email: email.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn store<S: Into<String>>(message: S) -> Self {
        Self::Store {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// True when the store rejected a write as a uniqueness conflict.
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::EmailTaken { .. })
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::EmailTaken { .. } => "EMAIL_TAKEN",
            Self::Store { .. } => "STORE_ERROR",
        }
    }
}

pub type Result<T> = StdResult<T, CoreError>;
