pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::sqlite::{connect, connect_in_memory, run_migrations};
pub use error::{DbError, Result};
pub use repositories::identity_repository::IdentityRepository;
