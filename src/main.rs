//! lowprice - Lowest-price shopping search backend
//!
//! `serve` runs the HTTP API; `search` runs one query and prints the JSON result.

use anyhow::Result;
use clap::{Parser, Subcommand};
use lowprice::commands::{SearchCommand, SearchRequest};
use lowprice::config::Config;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "lowprice",
    version,
    about = "Lowest-price shopping search backend",
    long_about = "Searches the Naver Shopping API and reports the cheapest offer and price range."
)]
struct Cli {
    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Upstream request timeout in seconds
    #[arg(long, global = true)]
    timeout: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve {
        /// Address to bind
        #[arg(long, env = "LOWPRICE_HOST")]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long, env = "LOWPRICE_PORT")]
        port: Option<u16>,
    },

    /// Run a single search and print the result as JSON
    #[command(alias = "s")]
    Search {
        /// Search query
        query: String,

        /// Number of items to return (max 100)
        #[arg(short, long)]
        display: Option<i64>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new(Level::DEBUG.to_string())
    } else {
        EnvFilter::from_default_env().add_directive("lowprice=info".parse()?)
    };

    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();

    // Load config with layered overrides
    let mut config = Config::load(cli.config.as_deref())?.with_env();

    if let Some(timeout) = cli.timeout {
        config.timeout_secs = timeout;
    }

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }

            lowprice::server::serve(&config).await?;
        }

        Commands::Search { query, display } => {
            let cmd = SearchCommand::from_config(&config)?;
            let result = cmd.execute(&SearchRequest::new(query, display)).await?;
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
    }

    Ok(())
}
