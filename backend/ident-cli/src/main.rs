//! ident - identity signup and login CLI
//!
//! # Examples
//!
//! ```bash
//! ident signup --name Ann --email ann@example.com \
//!     --password secret1 --password-confirmation secret1
//!
//! ident login --email ANN@example.com --password secret1 --pretty
//!
//! ident show <uuid>
//! ```

use ident_auth::{HashingPolicy, IdentityService, PasswordHasher};
use ident_cli::{Cli, CliError, Result as CliErrorResult, logger, run};
use ident_config::Config;
use ident_db::IdentityRepository;

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match execute(cli).await {
        Ok(code) => code,
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn execute(cli: Cli) -> CliErrorResult<ExitCode> {
    // Load and validate configuration
    let config = Config::load()?;
    config.validate()?;

    let log_file_path = config.log_file_path()?;
    if let Some(log_dir) = log_file_path.as_ref().and_then(|p| p.parent()) {
        std::fs::create_dir_all(log_dir).map_err(|e| CliError::Io {
            path: log_dir.to_path_buf(),
            source: e,
        })?;
    }

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("ident v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let database_path = config.database_path()?;
    info!("Opening identity store: {}", database_path.display());
    let pool = ident_db::connect(&database_path).await?;

    let policy = HashingPolicy::default()
        .memory_kib(config.hashing.memory_kib)
        .iterations(config.hashing.iterations)
        .parallelism(config.hashing.parallelism);
    let service = IdentityService::new(IdentityRepository::new(pool), PasswordHasher::new(policy))?;

    let output = run(cli.command, &service).await?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&output.body)?
    } else {
        serde_json::to_string(&output.body)?
    };
    println!("{}", json);

    Ok(if output.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
