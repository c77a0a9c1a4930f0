//! Upstream directory configuration.

use serde::Deserialize;

/// Where the upstream metadata directory lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Base URL of the upstream REST API.
    pub base_url: String,
    /// Environment GUID baked into environment-scoped upstream paths.
    pub environment_id: String,
}

impl UpstreamConfig {
    /// Base URL with any trailing slash removed, ready for path joining.
    #[must_use]
    pub fn base(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: "https://processing.dev.struxurewarecloud.com/api/processing".to_string(),
            environment_id: "8fa5c77f-5c2c-4a81-929b-92efe8f876f0".to_string(),
        }
    }
}
