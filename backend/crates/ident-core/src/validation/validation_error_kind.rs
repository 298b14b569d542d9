/// Which rule an attribute violated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationErrorKind {
    Blank,
    TooShort { min: usize },
    TooLong { max: usize },
    /// Does not match the accepted email syntax
    InvalidFormat,
    /// Another identity already uses this email (case-insensitive)
    Taken,
    /// Password and confirmation differ
    ConfirmationMismatch,
}

impl ValidationErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Blank => "blank",
            Self::TooShort { .. } => "too_short",
            Self::TooLong { .. } => "too_long",
            Self::InvalidFormat => "invalid",
            Self::Taken => "taken",
            Self::ConfirmationMismatch => "confirmation",
        }
    }
}

impl std::fmt::Display for ValidationErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Blank => write!(f, "can't be blank"),
            Self::TooShort { min } => write!(f, "is too short (minimum is {} characters)", min),
            Self::TooLong { max } => write!(f, "is too long (maximum is {} characters)", max),
            Self::InvalidFormat => write!(f, "is invalid"),
            Self::Taken => write!(f, "has already been taken"),
            Self::ConfirmationMismatch => write!(f, "doesn't match confirmation"),
        }
    }
}
