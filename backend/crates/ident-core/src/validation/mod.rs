pub mod credential_validator;
pub mod field;
pub mod field_error;
pub mod validation_error_kind;
pub mod validation_report;
