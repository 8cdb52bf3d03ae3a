use serde::Deserialize;

/// Where error documentation links point.
///
/// `documentationUrl` in every error document is `base_url` with the
/// subtype code appended.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DocsConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

impl Default for DocsConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080/api/docs#/".to_owned()
}
