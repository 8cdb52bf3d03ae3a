use std::path::Path;

use crate::Config;

impl Config {
    /// Load configuration from a TOML file
    ///
    /// Reads the file, expands `{{ env.VAR }}` placeholders, then
    /// deserializes and validates the result.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, environment variable
    /// expansion fails, TOML parsing fails, or validation fails
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("failed to read config file {}: {e}", path.display()))?;

        let expanded = crate::env::expand_env(&raw)
            .map_err(|e| anyhow::anyhow!("config variable expansion failed: {e}"))?;

        let config: Self =
            toml::from_str(&expanded).map_err(|e| anyhow::anyhow!("failed to parse config: {e}"))?;

        config.validate()?;

        Ok(config)
    }

    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if the docs base URL is empty or a gate exempt
    /// path does not start with `/`
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.docs.base_url.is_empty() {
            anyhow::bail!("docs.base_url must not be empty");
        }

        for path in &self.gate.exempt_paths {
            if !path.starts_with('/') {
                anyhow::bail!("gate.exempt_paths entries must start with '/': `{path}`");
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(config.docs.base_url, "http://localhost:8080/api/docs#/");
        assert!(config.gate.is_exempt("/health"));
        assert!(config.server.listen_address.is_none());
    }

    #[test]
    fn full_config_parses() {
        let config: Config = toml::from_str(
            r#"
            [server]
            listen_address = "127.0.0.1:9000"

            [gate]
            exempt_paths = ["/health", "/api/docs", "/status"]

            [docs]
            base_url = "https://docs.example.com/errors#/"
            "#,
        )
        .unwrap();
        assert!(config.validate().is_ok());
        assert_eq!(
            config.server.listen_address,
            Some("127.0.0.1:9000".parse().unwrap())
        );
        assert!(config.gate.is_exempt("/status"));
        assert_eq!(config.docs.base_url, "https://docs.example.com/errors#/");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result: Result<Config, _> = toml::from_str("[server]\nport = 8080\n");
        assert!(result.is_err());
    }

    #[test]
    fn relative_exempt_path_fails_validation() {
        let config: Config = toml::from_str("[gate]\nexempt_paths = [\"health\"]\n").unwrap();
        assert!(config.validate().is_err());
    }
}
