use std::net::SocketAddr;
use std::path::PathBuf;

use clap::Parser;

/// VibeMarket: browse marketplace listings.
#[derive(Debug, Parser)]
#[command(name = "vibemarket", version)]
pub struct Config {
    /// Address the HTTP server binds to.
    #[arg(long, env = "VIBEMARKET_BIND", default_value = "127.0.0.1:3000")]
    pub bind: SocketAddr,

    /// Maximum number of worker threads serving requests.
    #[arg(long, env = "VIBEMARKET_WORKERS", default_value_t = 8)]
    pub workers: usize,

    /// Listings JSON file to serve instead of the bundled data.
    #[arg(long, env = "VIBEMARKET_DATA")]
    pub data: Option<PathBuf>,
}
