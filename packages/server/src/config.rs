//! Command line and environment configuration.

use std::time::Duration;

use clap::Parser;

use crate::{
    domain::presence::DEFAULT_INACTIVITY_THRESHOLD, infrastructure::scheduler::DEFAULT_SWEEP_INTERVAL,
};

/// Lounge chat server
#[derive(Debug, Clone, Parser)]
#[command(version, about)]
pub struct ServerArgs {
    /// Address to bind
    #[arg(long, env = "LOUNGE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = 5000)]
    pub port: u16,

    /// Seconds without a heartbeat after which a participant is evicted
    #[arg(
        long,
        env = "LOUNGE_INACTIVITY_THRESHOLD_SECS",
        default_value_t = DEFAULT_INACTIVITY_THRESHOLD.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub inactivity_threshold_secs: u64,

    /// Seconds between two inactivity sweeps
    #[arg(
        long,
        env = "LOUNGE_SWEEP_INTERVAL_SECS",
        default_value_t = DEFAULT_SWEEP_INTERVAL.as_secs(),
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub sweep_interval_secs: u64,

    /// Default log level when RUST_LOG is not set
    #[arg(long, env = "LOUNGE_LOG_LEVEL", default_value = "debug")]
    pub log_level: String,
}

/// Resolved server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub inactivity_threshold: Duration,
    pub sweep_interval: Duration,
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            inactivity_threshold: DEFAULT_INACTIVITY_THRESHOLD,
            sweep_interval: DEFAULT_SWEEP_INTERVAL,
        }
    }
}

impl From<&ServerArgs> for ServerConfig {
    fn from(args: &ServerArgs) -> Self {
        Self {
            host: args.host.clone(),
            port: args.port,
            inactivity_threshold: Duration::from_secs(args.inactivity_threshold_secs),
            sweep_interval: Duration::from_secs(args.sweep_interval_secs),
        }
    }
}
