#![allow(clippy::must_use_candidate)]

pub mod docs;
mod env;
pub mod gate;
mod loader;
pub mod server;

use serde::Deserialize;

pub use docs::DocsConfig;
pub use gate::GateConfig;
pub use server::ServerConfig;

/// Top-level Vantage configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Request-integrity gate configuration
    #[serde(default)]
    pub gate: GateConfig,
    /// Error documentation configuration
    #[serde(default)]
    pub docs: DocsConfig,
}
