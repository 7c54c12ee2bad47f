//! Command-line arguments

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

use crate::config::{ConfigError, ServerConfig, StoreConfig};

#[derive(Debug, Parser)]
#[command(name = "employee-api")]
#[command(about = "Employee directory REST service")]
#[command(version)]
pub struct Cli {
    /// JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to listen on (overrides config)
    #[arg(short, long)]
    pub bind: Option<SocketAddr>,

    /// Keep records in this JSON file (overrides config)
    #[arg(long, conflicts_with = "in_memory")]
    pub data_file: Option<PathBuf>,

    /// Keep records in memory only (overrides config)
    #[arg(long)]
    pub in_memory: bool,
}

impl Cli {
    /// Load the config file, if any, and apply flag overrides.
    pub fn resolve(&self) -> Result<ServerConfig, ConfigError> {
        let mut config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };
        self.apply(&mut config);
        Ok(config)
    }

    fn apply(&self, config: &mut ServerConfig) {
        if let Some(bind) = self.bind {
            config.bind = bind;
        }
        if let Some(path) = &self.data_file {
            config.store = StoreConfig::File { path: path.clone() };
        }
        if self.in_memory {
            config.store = StoreConfig::Memory;
        }
    }
}
