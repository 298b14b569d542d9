use ident_core::Identity;

use serde::Serialize;

/// Identity DTO for JSON output. Credential material is never included.
#[derive(Debug, Serialize)]
pub struct IdentityDto {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Identity> for IdentityDto {
    fn from(i: Identity) -> Self {
        Self {
            id: i.id.to_string(),
            name: i.name,
            email: i.email,
            created_at: i.created_at.timestamp(),
            updated_at: i.updated_at.timestamp(),
        }
    }
}
