use ident_core::FieldError;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ValidationErrorDto {
    pub field: &'static str,
    /// Machine-readable tag, e.g. `password.too_short`
    pub code: String,
    pub message: String,
}

impl From<&FieldError> for ValidationErrorDto {
    fn from(e: &FieldError) -> Self {
        Self {
            field: e.field.as_str(),
            code: e.code(),
            message: e.to_string(),
        }
    }
}
