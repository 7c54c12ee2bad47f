//! # Employee Directory Application
//!
//! Configuration, command-line handling and wiring for the `employee-api`
//! binary.

pub mod cli;
pub mod config;
pub mod server;

pub use cli::Cli;
pub use config::{ConfigError, ServerConfig, StoreConfig};
pub use server::{build_app, run, serve};
