use chrono::NaiveDateTime;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Poll type used when the teacher does not pick one.
pub const DEFAULT_POLL_TYPE: &str = "multiple_choice";

fn default_poll_type() -> String {
    DEFAULT_POLL_TYPE.to_string()
}

/// Request body for creating a live poll.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewPoll {
    pub teacher_id: String,
    pub question: String,
    pub options: Vec<String>,
    #[serde(default = "default_poll_type")]
    pub poll_type: String,
}

impl NewPoll {
    /// A multiple-choice poll, the platform default.
    #[must_use]
    pub fn multiple_choice(teacher_id: String, question: String, options: Vec<String>) -> Self {
        Self {
            teacher_id,
            question,
            options,
            poll_type: default_poll_type(),
        }
    }
}

/// A live poll as the service stores it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Poll {
    pub poll_id: String,
    pub teacher_id: String,
    pub question: String,
    pub options: Vec<String>,
    pub poll_type: String,
    #[serde(default)]
    pub responses: Vec<PollAnswer>,
    pub created_at: NaiveDateTime,
    pub is_active: bool,
}

/// Request body for answering a poll.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct NewPollAnswer {
    pub student_id: String,
    pub selected_option: String,
    /// Seconds the student took to answer, when the client measured it.
    #[serde(default)]
    pub response_time: Option<f64>,
}

/// A recorded poll answer, echoed back on submission.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PollAnswer {
    pub response_id: String,
    pub poll_id: String,
    pub student_id: String,
    pub selected_option: String,
    #[serde(default)]
    pub response_time: Option<f64>,
    pub submitted_at: NaiveDateTime,
}

/// Aggregated results for one poll.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PollResults {
    pub poll_id: String,
    pub question: String,
    pub responses: Vec<PollOptionCount>,
    pub total_responses: u32,
    pub class_size: u32,
    pub participation_rate: f64,
}

/// Vote count for one poll option.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct PollOptionCount {
    pub option: String,
    pub count: u32,
    pub percentage: f64,
}
