//! Dispatch a parsed command to the identity service.

use crate::{Commands, ErrorResponse, IdentityDto, Result as CliErrorResult};

use ident_auth::{CreateOutcome, IdentityService};
use ident_core::{IdentityStore, NewIdentity};

use log::info;
use serde::Serialize;
use serde_json::Value;

const LOGIN_FAILED_MESSAGE: &str = "invalid email or password";
const SIGNUP_REJECTED_MESSAGE: &str = "signup rejected";
const NOT_FOUND_MESSAGE: &str = "identity not found";

/// JSON body to print, and whether the command succeeded
#[derive(Debug)]
pub struct CommandOutput {
    pub body: Value,
    pub success: bool,
}

impl CommandOutput {
    fn success<T: Serialize>(body: T) -> CliErrorResult<Self> {
        Ok(Self {
            body: serde_json::to_value(body)?,
            success: true,
        })
    }

    fn failure(body: ErrorResponse) -> CliErrorResult<Self> {
        Ok(Self {
            body: serde_json::to_value(body)?,
            success: false,
        })
    }
}

/// Run one command.
///
/// Rejections (invalid signup, failed login, unknown id) are a failed
/// `CommandOutput`; only store and hashing faults are errors.
pub async fn run<S: IdentityStore>(
    command: Commands,
    service: &IdentityService<S>,
) -> CliErrorResult<CommandOutput> {
    match command {
        Commands::Signup {
            name,
            email,
            password,
            password_confirmation,
        } => {
            let candidate = NewIdentity::new(name, email, password, password_confirmation);

            match service.create_identity(candidate).await? {
                CreateOutcome::Created(identity) => {
                    CommandOutput::success(IdentityDto::from(identity))
                }
                CreateOutcome::Invalid(report) | CreateOutcome::Conflict(report) => {
                    CommandOutput::failure(ErrorResponse::from_report(
                        SIGNUP_REJECTED_MESSAGE,
                        &report,
                    ))
                }
            }
        }

        Commands::Login { email, password } => {
            match service.authenticate(&email, &password).await? {
                Some(identity) => {
                    info!("Login succeeded for identity {}", identity.id);
                    CommandOutput::success(IdentityDto::from(identity))
                }
                None => CommandOutput::failure(ErrorResponse::new(LOGIN_FAILED_MESSAGE)),
            }
        }

        Commands::Show { id } => match service.find_by_id(id).await? {
            Some(identity) => CommandOutput::success(IdentityDto::from(identity)),
            None => CommandOutput::failure(ErrorResponse::new(NOT_FOUND_MESSAGE)),
        },
    }
}
