use crate::{DEFAULT_SERVER_URL, commands::Commands};

use clap::Parser;

#[derive(Parser)]
#[command(name = "pilot")]
#[command(about = "Submit and review pilot requests")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Server URL
    #[arg(long, global = true, env = "PILOT_SERVER_URL", default_value = DEFAULT_SERVER_URL)]
    pub server: String,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
