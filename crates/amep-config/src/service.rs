//! AMEP backend service configuration.

use serde::{Deserialize, Serialize};

/// Default API base URL for a local development backend.
fn default_base_url() -> String {
    "http://127.0.0.1:5000/api".to_string()
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServiceConfig {
    /// Base URL of the AMEP REST API, up to and including `/api`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Teacher account the CLI acts as.
    #[serde(default)]
    pub teacher_id: String,

    /// Per-request timeout, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            teacher_id: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ServiceConfig {
    /// Check whether the section has the minimum fields network commands need.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        !self.base_url.is_empty() && !self.teacher_id.is_empty()
    }
}
