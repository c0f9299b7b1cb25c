use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::MasteryLevel;
use crate::scoring;

/// Progress metrics for a project. All component scores are 0-100.
///
/// Records that predate the metrics rollout omit the block entirely, and
/// partial blocks omit individual components; both default to zero.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct Metrics {
    pub completion_percentage: f64,
    pub quality_score: f64,
    pub efficiency_score: f64,
    pub collaboration_score: f64,
}

impl Metrics {
    /// Unweighted mean of the four component scores.
    #[must_use]
    pub fn overall(&self) -> f64 {
        scoring::average(&[
            self.completion_percentage,
            self.quality_score,
            self.efficiency_score,
            self.collaboration_score,
        ])
    }

    /// Mastery band for the overall score.
    #[must_use]
    pub fn mastery(&self) -> MasteryLevel {
        MasteryLevel::from_score(self.overall())
    }
}
