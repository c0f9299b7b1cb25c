use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Team name shown when a project has no team assigned yet.
pub const PLACEHOLDER_TEAM_NAME: &str = "No Team";

/// A student team attached to a project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Team {
    pub team_name: String,
    #[serde(default)]
    pub members: Vec<String>,
}

impl Team {
    /// The placeholder team used when a record has none.
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            team_name: PLACEHOLDER_TEAM_NAME.to_string(),
            members: Vec::new(),
        }
    }
}
