use ident_core::{CoreError, ErrorLocation};

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    #[error("Unique constraint violated for email {email} {location}")]
    UniqueViolation {
        email: String,
        location: ErrorLocation,
    },

    /// A stored row could not be mapped back into an `Identity`
    #[error("Corrupt row in {table}: {message} {location}")]
    CorruptRow {
        table: &'static str,
        message: String,
        location: ErrorLocation,
    },
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        Self::Sqlx {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<DbError> for CoreError {
    #[track_caller]
    fn from(error: DbError) -> Self {
        match error {
            DbError::UniqueViolation { email, .. } => CoreError::email_taken(email),
            other => CoreError::store(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
