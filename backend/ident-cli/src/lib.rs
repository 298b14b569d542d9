//! ident-cli library
//!
//! Command definitions, JSON output types and the dispatcher, exported so the
//! binary stays thin and the dispatcher can be tested against a real store.

pub mod cli;
pub mod commands;
pub mod dto;
pub mod error;
pub mod logger;
pub mod runner;

#[cfg(test)]
mod tests;

pub use cli::Cli;
pub use commands::Commands;
pub use dto::{ErrorResponse, IdentityDto, ValidationErrorDto};
pub use error::{CliError, Result};
pub use runner::{CommandOutput, run};
