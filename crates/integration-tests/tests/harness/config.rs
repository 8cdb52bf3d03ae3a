//! Builder for test configurations

use vantage_config::Config;

pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// Replace the gate's exempt path prefixes
    #[allow(dead_code)]
    pub fn with_exempt_paths(mut self, paths: &[&str]) -> Self {
        self.config.gate.exempt_paths = paths.iter().map(ToString::to_string).collect();
        self
    }

    /// Point documentation links at a different base URL
    #[allow(dead_code)]
    pub fn with_docs_base(mut self, base: &str) -> Self {
        self.config.docs.base_url = base.to_owned();
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
