//! # employee-api - Employee directory REST service
//!
//! Usage:
//!   employee-api                          - Serve an in-memory directory on 127.0.0.1:8080
//!   employee-api --config server.json     - Serve with settings from a JSON file
//!   employee-api --data-file staff.json   - Keep records in a JSON file
//!   employee-api --bind 0.0.0.0:9000      - Listen on another address

use clap::Parser;
use employee_app::Cli;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.resolve()?;

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    employee_app::run(config).await
}
