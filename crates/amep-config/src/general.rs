//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Classroom to open when none is named on the command line.
    /// Empty means "let the workspace pick the first classroom".
    #[serde(default)]
    pub default_classroom: String,

    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_classroom: String::new(),
            default_limit: default_limit(),
        }
    }
}

impl GeneralConfig {
    /// The configured default classroom, if any.
    #[must_use]
    pub fn default_classroom(&self) -> Option<&str> {
        if self.default_classroom.is_empty() {
            None
        } else {
            Some(&self.default_classroom)
        }
    }
}
