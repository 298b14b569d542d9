use clap::Subcommand;
use uuid::Uuid;

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new identity
    Signup {
        /// Display name (at most 50 characters)
        #[arg(long)]
        name: String,

        /// Email address, unique ignoring case
        #[arg(long)]
        email: String,

        /// Password (6 to 40 characters)
        #[arg(long)]
        password: String,

        /// Must match --password
        #[arg(long)]
        password_confirmation: String,
    },

    /// Check an email and password pair
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Show a stored identity by id
    Show {
        /// Identity ID (UUID)
        id: Uuid,
    },
}
