use std::path::PathBuf;

use clap::Parser;

/// Vantage catalog service
#[derive(Debug, Parser)]
#[command(name = "vantage", about = "Catalog service with a request-integrity gate")]
pub struct Args {
    /// Path to configuration file
    #[arg(short, long, default_value = "vantage.toml", env = "VANTAGE_CONFIG")]
    pub config: PathBuf,

    /// Override the listen address
    #[arg(long, env = "VANTAGE_LISTEN")]
    pub listen: Option<std::net::SocketAddr>,
}
