use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::EngagementLevel;

/// Default analysis window in days.
const fn default_window_days() -> u32 {
    7
}

/// Request body for a single-student engagement analysis.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EngagementSignals {
    pub student_id: String,
    pub classroom_id: String,
    /// How many days of signal history to analyze.
    #[serde(default = "default_window_days")]
    pub window_days: u32,
}

impl EngagementSignals {
    /// Signals request over the default analysis window.
    #[must_use]
    pub const fn new(student_id: String, classroom_id: String) -> Self {
        Self {
            student_id,
            classroom_id,
            window_days: default_window_days(),
        }
    }
}

/// Result of analyzing one student's implicit and explicit signals.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct EngagementAnalysis {
    pub engagement_score: f64,
    pub implicit_component: f64,
    pub explicit_component: f64,
    pub engagement_level: EngagementLevel,
    pub behaviors_detected: u32,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Count of students per engagement band.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE", default)]
pub struct EngagementDistribution {
    pub engaged: u32,
    pub passive: u32,
    pub monitor: u32,
    pub at_risk: u32,
    pub critical: u32,
}

impl EngagementDistribution {
    /// Total students counted across all bands.
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.engaged + self.passive + self.monitor + self.at_risk + self.critical
    }
}

/// A student flagged for teacher attention.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct StudentAlert {
    pub student_id: String,
    pub name: String,
    pub engagement_score: f64,
    pub engagement_level: EngagementLevel,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Class-level engagement rollup.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct ClassEngagement {
    pub class_id: String,
    pub class_engagement_index: f64,
    pub distribution: EngagementDistribution,
    pub alert_count: u32,
    #[serde(default)]
    pub students_needing_attention: Vec<StudentAlert>,
    pub trend: String,
    pub engagement_rate: f64,
}
