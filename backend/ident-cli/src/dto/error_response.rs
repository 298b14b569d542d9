use crate::ValidationErrorDto;

use ident_core::ValidationReport;

use serde::Serialize;

/// Failure body printed for rejected commands
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<ValidationErrorDto>,
}

impl ErrorResponse {
    pub fn new<S: Into<String>>(error: S) -> Self {
        Self {
            error: error.into(),
            errors: Vec::new(),
        }
    }

    pub fn from_report<S: Into<String>>(error: S, report: &ValidationReport) -> Self {
        Self {
            error: error.into(),
            errors: report.errors().iter().map(ValidationErrorDto::from).collect(),
        }
    }
}
