use crate::{Field, ValidationErrorKind};

/// A single violated rule, tagged by field and kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldError {
    pub field: Field,
    pub kind: ValidationErrorKind,
}

impl FieldError {
    pub fn new(field: Field, kind: ValidationErrorKind) -> Self {
        Self { field, kind }
    }

    /// Stable machine-readable tag, e.g. `email.taken`
    pub fn code(&self) -> String {
        format!("{}.{}", self.field.as_str(), self.kind.as_str())
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.field, self.kind)
    }
}
