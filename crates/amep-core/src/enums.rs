//! Workflow stage enums and score bands for AMEP.
//!
//! [`Stage`] and [`StageStatus`] model the fixed five-stage project workflow.
//! [`MasteryLevel`] and [`EngagementLevel`] classify 0-100 scores into the
//! bands the analytics endpoints report. Stage and band enums serialize as
//! `SCREAMING_SNAKE_CASE`, stage statuses as `snake_case`, matching the
//! service wire format.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::LifecycleError;

// ---------------------------------------------------------------------------
// Stage
// ---------------------------------------------------------------------------

/// A stage of the fixed five-stage project workflow.
///
/// ```text
/// QUESTIONING → RESEARCH → SYNTHESIS → PRESENTATION → REFLECTION
/// ```
///
/// Every project is created in [`Stage::Questioning`]; the service owns all
/// later transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Stage {
    Questioning,
    Research,
    Synthesis,
    Presentation,
    Reflection,
}

impl Stage {
    /// All stages in workflow order.
    pub const PIPELINE: [Self; 5] = [
        Self::Questioning,
        Self::Research,
        Self::Synthesis,
        Self::Presentation,
        Self::Reflection,
    ];

    /// The stage every new project starts in.
    #[must_use]
    pub const fn first() -> Self {
        Self::Questioning
    }

    /// Zero-based position within [`Self::PIPELINE`].
    #[must_use]
    pub const fn position(self) -> usize {
        match self {
            Self::Questioning => 0,
            Self::Research => 1,
            Self::Synthesis => 2,
            Self::Presentation => 3,
            Self::Reflection => 4,
        }
    }

    /// Parse the wire representation (e.g. `"QUESTIONING"`).
    ///
    /// The match is exact: the service always sends upper-case tags, and
    /// anything else is treated as outside the workflow.
    pub fn parse(value: &str) -> Result<Self, LifecycleError> {
        match value {
            "QUESTIONING" => Ok(Self::Questioning),
            "RESEARCH" => Ok(Self::Research),
            "SYNTHESIS" => Ok(Self::Synthesis),
            "PRESENTATION" => Ok(Self::Presentation),
            "REFLECTION" => Ok(Self::Reflection),
            other => Err(LifecycleError::InvalidStage {
                stage: other.to_string(),
            }),
        }
    }

    /// Return the wire representation used by the service.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Questioning => "QUESTIONING",
            Self::Research => "RESEARCH",
            Self::Synthesis => "SYNTHESIS",
            Self::Presentation => "PRESENTATION",
            Self::Reflection => "REFLECTION",
        }
    }

    /// Human-readable label for tables and summaries.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Questioning => "Questioning",
            Self::Research => "Research",
            Self::Synthesis => "Synthesis",
            Self::Presentation => "Presentation",
            Self::Reflection => "Reflection",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// StageStatus
// ---------------------------------------------------------------------------

/// Where a workflow stage stands relative to a project's current stage.
///
/// In a rendered pipeline, every stage before the current one is `completed`,
/// the current stage is `in_progress`, and every later stage is
/// `not_started`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum StageStatus {
    Completed,
    InProgress,
    NotStarted,
}

impl StageStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Completed => "completed",
            Self::InProgress => "in_progress",
            Self::NotStarted => "not_started",
        }
    }
}

impl fmt::Display for StageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MasteryLevel
// ---------------------------------------------------------------------------

/// Mastery band for a 0-100 mastery score.
///
/// ```text
/// [0, 20)  not started
/// [20, 50) developing
/// [50, 70) approaching
/// [70, 90) proficient
/// [90, ..] mastered
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum MasteryLevel {
    NotStarted,
    Developing,
    Approaching,
    Proficient,
    Mastered,
}

impl MasteryLevel {
    /// Classify a 0-100 score into its mastery band.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score < 20.0 {
            Self::NotStarted
        } else if score < 50.0 {
            Self::Developing
        } else if score < 70.0 {
            Self::Approaching
        } else if score < 90.0 {
            Self::Proficient
        } else {
            Self::Mastered
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NotStarted => "NOT_STARTED",
            Self::Developing => "DEVELOPING",
            Self::Approaching => "APPROACHING",
            Self::Proficient => "PROFICIENT",
            Self::Mastered => "MASTERED",
        }
    }
}

impl fmt::Display for MasteryLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EngagementLevel
// ---------------------------------------------------------------------------

/// Engagement band for a 0-100 engagement score.
///
/// ```text
/// [0, 30)  critical
/// [30, 50) at risk
/// [50, 60) monitor
/// [60, 75) passive
/// [75, ..] engaged
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EngagementLevel {
    Critical,
    AtRisk,
    Monitor,
    Passive,
    Engaged,
}

impl EngagementLevel {
    /// Classify a 0-100 score into its engagement band.
    #[must_use]
    pub fn from_score(score: f64) -> Self {
        if score < 30.0 {
            Self::Critical
        } else if score < 50.0 {
            Self::AtRisk
        } else if score < 60.0 {
            Self::Monitor
        } else if score < 75.0 {
            Self::Passive
        } else {
            Self::Engaged
        }
    }

    /// Whether this band should surface an alert to the teacher.
    #[must_use]
    pub const fn needs_attention(self) -> bool {
        matches!(self, Self::Critical | Self::AtRisk)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Critical => "CRITICAL",
            Self::AtRisk => "AT_RISK",
            Self::Monitor => "MONITOR",
            Self::Passive => "PASSIVE",
            Self::Engaged => "ENGAGED",
        }
    }
}

impl fmt::Display for EngagementLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
