use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "ident")]
#[command(about = "Identity signup and login against the local identity store")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
