use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A classroom as returned by the teacher's classroom list.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Classroom {
    pub classroom_id: String,
    pub class_name: String,
}
