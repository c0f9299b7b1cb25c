use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A file a team uploaded against a project.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Artifact {
    pub artifact_id: String,
    pub file_name: String,
    #[serde(default)]
    pub uploaded_at: Option<NaiveDateTime>,
}
