use ident_core::{Identity, ValidationReport};

/// Result of a signup attempt that did not hit a store fault
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// Validated, hashed and persisted
    Created(Identity),
    /// Rejected before any write; nothing was persisted
    Invalid(ValidationReport),
    /// Passed validation but the store's unique-email constraint rejected the
    /// write (a concurrent signup won). The report carries `email.taken`.
    Conflict(ValidationReport),
}

impl CreateOutcome {
    pub fn identity(&self) -> Option<&Identity> {
        match self {
            Self::Created(identity) => Some(identity),
            _ => None,
        }
    }

    /// Validation errors to show the caller, for both rejection kinds
    pub fn report(&self) -> Option<&ValidationReport> {
        match self {
            Self::Created(_) => None,
            Self::Invalid(report) | Self::Conflict(report) => Some(report),
        }
    }

    pub fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}
