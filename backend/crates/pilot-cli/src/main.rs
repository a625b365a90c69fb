//! pilot - pilot request intake CLI
//!
//! # Examples
//!
//! ```bash
//! # Submit a request (checked locally before sending)
//! pilot submit --name "Sarah Chen" --email sarah@vitalpath.com \
//!     --industry healthcare --use-case latency-optimization \
//!     --deployment-type hardware --network-size medium
//!
//! # List requests
//! pilot list --pretty
//!
//! # Show the choices for one field
//! pilot options networkSize
//! ```

use pilot_cli::{CliClientResult, Client, cli::Cli, commands::Commands};

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let client = Client::new(&cli.server);

    let result = run(&client, &cli.command).await;

    // Handle result
    match result {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{}", json);
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {}", e);
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(client: &Client, command: &Commands) -> CliClientResult<Value> {
    match command {
        Commands::Submit { .. } => {
            let submission = command.submission().unwrap_or_default();
            let request = submission.validate()?;
            client.submit_pilot_request(&request).await
        }
        Commands::List => client.list_pilot_requests().await,
        Commands::Options { .. } => {
            let field = command.option_field()?;
            client.list_pilot_options(field).await
        }
    }
}
