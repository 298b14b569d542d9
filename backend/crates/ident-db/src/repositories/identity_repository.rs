//! Identity repository.
//!
//! Rows are keyed by `id`; `email_normalized` is UNIQUE and is what lookups
//! and the existence check query. A write that trips the constraint comes
//! back as `DbError::UniqueViolation`, never as a generic SQLx error.

use crate::{DbError, Result as DbErrorResult};

use ident_core::{
    CoreError, Identity, IdentityStore, PasswordDigest, Result as CoreErrorResult, Salt,
};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};
use uuid::Uuid;

const TABLE: &str = "identities";

pub struct IdentityRepository {
    pool: SqlitePool,
}

impl IdentityRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, identity: &Identity) -> DbErrorResult<()> {
        let id = identity.id.to_string();
        let email_normalized = identity.normalized_email();
        let created_at = identity.created_at.timestamp();
        let updated_at = identity.updated_at.timestamp();

        sqlx::query(
            r#"
                INSERT INTO identities (
                    id, name, email, email_normalized, salt, password_digest,
                    created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&id)
        .bind(&identity.name)
        .bind(&identity.email)
        .bind(&email_normalized)
        .bind(identity.salt.as_str())
        .bind(identity.password_digest.as_str())
        .bind(created_at)
        .bind(updated_at)
        .execute(&self.pool)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(ref db_error) if db_error.is_unique_violation() => {
                DbError::UniqueViolation {
                    email: identity.email.clone(),
                    location: ErrorLocation::from(Location::caller()),
                }
            }
            _ => DbError::from(e),
        })?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Identity>> {
        let id_str = id.to_string();

        let row = sqlx::query(
            r#"
                SELECT id, name, email, salt, password_digest, created_at, updated_at
                FROM identities
                WHERE id = ?
            "#,
        )
        .bind(&id_str)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(identity_from_row).transpose()
    }

    pub async fn find_by_normalized_email(
        &self,
        normalized_email: &str,
    ) -> DbErrorResult<Option<Identity>> {
        let row = sqlx::query(
            r#"
                SELECT id, name, email, salt, password_digest, created_at, updated_at
                FROM identities
                WHERE email_normalized = ?
            "#,
        )
        .bind(normalized_email)
        .fetch_optional(&self.pool)
        .await?;

        row.as_ref().map(identity_from_row).transpose()
    }

    pub async fn email_exists(&self, normalized_email: &str) -> DbErrorResult<bool> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM identities WHERE email_normalized = ?")
                .bind(normalized_email)
                .fetch_one(&self.pool)
                .await?;

        Ok(count > 0)
    }
}

fn identity_from_row(row: &SqliteRow) -> DbErrorResult<Identity> {
    let id: String = row.try_get("id")?;
    let salt: String = row.try_get("salt")?;
    let password_digest: String = row.try_get("password_digest")?;
    let created_at: i64 = row.try_get("created_at")?;
    let updated_at: i64 = row.try_get("updated_at")?;

    Ok(Identity {
        id: Uuid::parse_str(&id)
            .map_err(|e| corrupt(format!("Invalid UUID in identities.id: {}", e)))?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        salt: Salt::try_from(salt).map_err(|e| corrupt(e.to_string()))?,
        password_digest: PasswordDigest::try_from(password_digest)
            .map_err(|e| corrupt(e.to_string()))?,
        created_at: timestamp(created_at, "created_at")?,
        updated_at: timestamp(updated_at, "updated_at")?,
    })
}

fn timestamp(seconds: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(seconds, 0)
        .ok_or_else(|| corrupt(format!("Invalid timestamp in identities.{}", column)))
}

#[track_caller]
fn corrupt(message: String) -> DbError {
    DbError::CorruptRow {
        table: TABLE,
        message,
        location: ErrorLocation::from(Location::caller()),
    }
}

#[async_trait]
impl IdentityStore for IdentityRepository {
    async fn find_by_normalized_email(
        &self,
        normalized_email: &str,
    ) -> CoreErrorResult<Option<Identity>> {
        Ok(IdentityRepository::find_by_normalized_email(self, normalized_email).await?)
    }

    async fn find_by_id(&self, id: Uuid) -> CoreErrorResult<Option<Identity>> {
        Ok(IdentityRepository::find_by_id(self, id).await?)
    }

    async fn email_exists(&self, normalized_email: &str) -> CoreErrorResult<bool> {
        Ok(IdentityRepository::email_exists(self, normalized_email).await?)
    }

    async fn persist(&self, identity: &Identity) -> CoreErrorResult<()> {
        self.create(identity).await.map_err(CoreError::from)
    }
}
