use serde::Deserialize;

/// Request-integrity gate configuration.
///
/// Paths listed in `exempt_paths` are matched by prefix and skip
/// header validation entirely.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GateConfig {
    #[serde(default = "default_exempt_paths")]
    pub exempt_paths: Vec<String>,
}

impl Default for GateConfig {
    fn default() -> Self {
        Self {
            exempt_paths: default_exempt_paths(),
        }
    }
}

fn default_exempt_paths() -> Vec<String> {
    vec!["/health".to_owned(), "/api/docs".to_owned()]
}

impl GateConfig {
    /// Whether the gate should skip this request path
    pub fn is_exempt(&self, path: &str) -> bool {
        self.exempt_paths.iter().any(|p| path.starts_with(p.as_str()))
    }
}
