//! Preclear - customs pre-clearance pricing service
//!
//! Loads configuration, initializes logging and serves the HTTP API.

#![allow(missing_docs)]

use clap::Parser;
use preclear::config::{Config, DEFAULT_CONFIG_PATH};
use preclear::server;
use preclear::utils::logging::init_logging;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "preclear", version, about = "Customs pre-clearance pricing service")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "PRECLEAR_CONFIG", default_value = DEFAULT_CONFIG_PATH)]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let config = match Config::load(&args.config).await {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = init_logging(config.logging()) {
        eprintln!("Error: {}", e);
        return ExitCode::FAILURE;
    }

    match server::builder::run_server(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            // Display keeps multi-line messages readable
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
