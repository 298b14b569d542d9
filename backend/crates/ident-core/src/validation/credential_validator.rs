use crate::{
    Field, IdentityStore, NewIdentity, Result as CoreErrorResult, ValidationErrorKind,
    ValidationReport, normalize_email,
};

use std::sync::LazyLock;

use regex::Regex;

pub const MAX_NAME_LENGTH: usize = 50;
pub const MIN_PASSWORD_LENGTH: usize = 6;
pub const MAX_PASSWORD_LENGTH: usize = 40;

const EMAIL_PATTERN: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

static EMAIL_REGEX: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN).ok());

/// Decides whether a proposed identity may be persisted.
///
/// All rules run on every call; the report lists each violation rather than
/// stopping at the first one.
pub struct CredentialValidator;

impl CredentialValidator {
    /// Run every rule, including the store-backed email uniqueness check.
    ///
    /// The store is only read. Store faults are returned as errors and are
    /// never folded into the report.
    pub async fn validate<S>(
        candidate: &NewIdentity,
        store: &S,
    ) -> CoreErrorResult<ValidationReport>
    where
        S: IdentityStore + ?Sized,
    {
        let mut report = Self::check_attributes(candidate);

        if !candidate.email.is_empty()
            && store
                .email_exists(&normalize_email(&candidate.email))
                .await?
        {
            report.add(Field::Email, ValidationErrorKind::Taken);
        }

        Ok(report)
    }

    /// Run the rules that need nothing but the candidate itself
    pub fn check_attributes(candidate: &NewIdentity) -> ValidationReport {
        let mut report = ValidationReport::new();

        Self::check_name(&candidate.name, &mut report);
        Self::check_email_format(&candidate.email, &mut report);
        Self::check_password(
            &candidate.password,
            &candidate.password_confirmation,
            &mut report,
        );

        report
    }

    pub fn is_valid_email(email: &str) -> bool {
        EMAIL_REGEX
            .as_ref()
            .is_some_and(|re| re.is_match(email))
    }

    fn check_name(name: &str, report: &mut ValidationReport) {
        if name.is_empty() {
            report.add(Field::Name, ValidationErrorKind::Blank);
        } else if name.chars().count() > MAX_NAME_LENGTH {
            report.add(
                Field::Name,
                ValidationErrorKind::TooLong {
                    max: MAX_NAME_LENGTH,
                },
            );
        }
    }

    fn check_email_format(email: &str, report: &mut ValidationReport) {
        if email.is_empty() {
            report.add(Field::Email, ValidationErrorKind::Blank);
        } else if !Self::is_valid_email(email) {
            report.add(Field::Email, ValidationErrorKind::InvalidFormat);
        }
    }

    fn check_password(password: &str, confirmation: &str, report: &mut ValidationReport) {
        let length = password.chars().count();

        if password.is_empty() {
            report.add(Field::Password, ValidationErrorKind::Blank);
        } else if length < MIN_PASSWORD_LENGTH {
            report.add(
                Field::Password,
                ValidationErrorKind::TooShort {
                    min: MIN_PASSWORD_LENGTH,
                },
            );
        } else if length > MAX_PASSWORD_LENGTH {
            report.add(
                Field::Password,
                ValidationErrorKind::TooLong {
                    max: MAX_PASSWORD_LENGTH,
                },
            );
        }

        // Byte-exact, case-sensitive
        if password != confirmation {
            report.add(Field::Password, ValidationErrorKind::ConfirmationMismatch);
        }
    }
}
