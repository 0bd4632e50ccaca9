//! Service runtime configuration.
//!
//! Only process settings live here. The layer endpoints are fixed in
//! [`crate::layers::LAYERS`] and are not configurable at runtime.

use std::time::Duration;

use clap::Parser;
use http_transport::TransportConfig;

/// SGU geodata API server
#[derive(Parser, Debug, Clone)]
#[command(name = "geodata-api")]
#[command(about = "Swedish geological survey geodata for tool-calling agents")]
pub struct Args {
    /// Listen address
    #[arg(short, long, default_value = "0.0.0.0:8090", env = "GEODATA_LISTEN_ADDR")]
    pub listen: String,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    pub log_level: String,

    /// Timeout for each upstream request, in seconds
    #[arg(long, default_value_t = 30, env = "GEODATA_HTTP_TIMEOUT_SECS")]
    pub timeout_secs: u64,

    /// Number of worker threads
    #[arg(long, env = "GEODATA_WORKER_THREADS")]
    pub worker_threads: Option<usize>,
}

impl Args {
    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.max(1))
    }

    pub fn transport_config(&self) -> TransportConfig {
        TransportConfig {
            timeout: self.upstream_timeout(),
            ..TransportConfig::default()
        }
    }
}
