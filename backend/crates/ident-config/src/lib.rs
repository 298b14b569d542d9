mod config;
mod database_config;
mod error;
mod hashing_config;
mod log_level;
mod logging_config;

pub use config::Config;
pub use database_config::DatabaseConfig;
pub use error::{ConfigError, ConfigErrorResult};
pub use hashing_config::HashingConfig;
pub use log_level::LogLevel;
pub use logging_config::LoggingConfig;

#[cfg(test)]
mod tests;

pub const CONFIG_DIR_ENV: &str = "IDENT_CONFIG_DIR";
const DEFAULT_CONFIG_DIR: &str = ".ident";
const CONFIG_FILENAME: &str = "config.toml";

const DEFAULT_DATABASE_FILENAME: &str = "identities.db";
const DEFAULT_LOG_LEVEL_STRING: &str = "info";
const DEFAULT_LOG_LEVEL: log::LevelFilter = log::LevelFilter::Info;
const DEFAULT_LOG_DIRECTORY: &str = "log";
const DEFAULT_LOG_COLORED: bool = true;

// Argon2id cost bounds
pub use ident_auth::hashing_policy::{
    DEFAULT_ITERATIONS, DEFAULT_MEMORY_KIB, DEFAULT_PARALLELISM, MAX_ITERATIONS, MAX_MEMORY_KIB,
    MAX_PARALLELISM, MIN_ITERATIONS, MIN_MEMORY_KIB, MIN_PARALLELISM,
};
