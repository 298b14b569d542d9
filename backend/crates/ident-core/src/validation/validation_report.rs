use crate::{Field, FieldError, ValidationErrorKind};

/// Every rule violation found for one candidate identity.
///
/// An empty report means the candidate may be persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: Vec<FieldError>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add(&mut self, field: Field, kind: ValidationErrorKind) {
        self.errors.push(FieldError::new(field, kind));
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    pub fn errors_on(&self, field: Field) -> impl Iterator<Item = &FieldError> {
        self.errors.iter().filter(move |e| e.field == field)
    }

    pub fn has_error(&self, field: Field, kind: ValidationErrorKind) -> bool {
        self.errors
            .iter()
            .any(|e| e.field == field && e.kind == kind)
    }

    pub fn codes(&self) -> Vec<String> {
        self.errors.iter().map(FieldError::code).collect()
    }
}

impl From<FieldError> for ValidationReport {
    fn from(error: FieldError) -> Self {
        Self {
            errors: vec![error],
        }
    }
}
