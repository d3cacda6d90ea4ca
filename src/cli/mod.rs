use anyhow::Result;
use clap::{Parser, Subcommand};
use std::env;

pub mod serve;

#[derive(Subcommand)]
enum Command {
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "0.0.0.0")]
        host: String,

        /// Set the server port, falls back to the PORT env var
        #[arg(long)]
        port: Option<String>,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();

    // Handle each sub command, defaulting to running the server
    match args.command {
        Some(Command::Serve { host, port }) => {
            serve::run(host, resolve_port(port)).await;
        }
        None => {
            serve::run("0.0.0.0".to_string(), resolve_port(None)).await;
        }
    }

    Ok(())
}

fn resolve_port(port: Option<String>) -> String {
    port.or_else(|| env::var("PORT").ok())
        .unwrap_or_else(|| "3000".to_string())
}
