use chrono::NaiveDate;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Artifact, Metrics, Milestone, Team};
use crate::enums::Stage;
use crate::lifecycle::{self, StageProgress};
use crate::scoring;

/// The project type tag the platform creates every project with.
pub const DEFAULT_PROJECT_TYPE: &str = "team";

/// One entry of a classroom's project list.
///
/// The list endpoint returns a trimmed view; fetch the full record by ID for
/// anything beyond picking and titles.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProjectSummary {
    pub project_id: String,
    pub title: String,
    /// Raw stage tag as the service sent it; parsed only on the full record.
    #[serde(default)]
    pub stage: Option<String>,
    #[serde(default)]
    pub project_type: Option<String>,
}

/// A project detail record exactly as the service returns it.
///
/// Every field can be absent on the wire: records that predate the metrics
/// rollout omit `metrics`, `teams`, `milestones`, and `artifacts` entirely.
/// [`ProjectRecord::normalize`] converts this into a [`Project`] that display
/// code can consume without null checks.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(default)]
pub struct ProjectRecord {
    pub project_id: String,
    pub title: String,
    pub description: String,
    pub deadline: Option<NaiveDate>,
    pub classroom_id: String,
    pub teacher_id: String,
    /// Raw stage tag; anything outside the workflow set normalizes to `None`.
    pub stage: Option<String>,
    pub project_type: Option<String>,
    pub metrics: Option<Metrics>,
    pub teams: Option<Vec<Team>>,
    pub milestones: Option<Vec<Milestone>>,
    pub artifacts: Option<Vec<Artifact>>,
}

impl ProjectRecord {
    /// Normalize a raw service record into a display-ready [`Project`].
    ///
    /// Missing collections become empty, missing metrics become zeroes, and
    /// a missing project type falls back to [`DEFAULT_PROJECT_TYPE`]. A stage
    /// tag outside the workflow set is logged and mapped to `None`, which
    /// renders as a pipeline where nothing has started.
    #[must_use]
    pub fn normalize(self) -> Project {
        let stage = self.stage.as_deref().and_then(|raw| {
            Stage::parse(raw).map_or_else(
                |_| {
                    tracing::warn!(
                        project_id = %self.project_id,
                        stage = raw,
                        "unrecognized stage on project record"
                    );
                    None
                },
                Some,
            )
        });

        Project {
            project_id: self.project_id,
            title: self.title,
            description: self.description,
            deadline: self.deadline,
            classroom_id: self.classroom_id,
            teacher_id: self.teacher_id,
            stage,
            project_type: self
                .project_type
                .unwrap_or_else(|| DEFAULT_PROJECT_TYPE.to_string()),
            metrics: self.metrics.unwrap_or_default(),
            teams: self.teams.unwrap_or_default(),
            milestones: self.milestones.unwrap_or_default(),
            artifacts: self.artifacts.unwrap_or_default(),
        }
    }
}

/// A normalized project, safe for direct display.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct Project {
    pub project_id: String,
    pub title: String,
    pub description: String,
    pub deadline: Option<NaiveDate>,
    pub classroom_id: String,
    pub teacher_id: String,
    /// `None` when the service reported a stage outside the workflow.
    pub stage: Option<Stage>,
    pub project_type: String,
    pub metrics: Metrics,
    pub teams: Vec<Team>,
    pub milestones: Vec<Milestone>,
    pub artifacts: Vec<Artifact>,
}

impl Project {
    /// The team to show for this project: the first team, or the placeholder
    /// when the record has none.
    #[must_use]
    pub fn display_team(&self) -> Team {
        self.teams.first().cloned().unwrap_or_else(Team::placeholder)
    }

    /// The canonical five-stage pipeline with per-stage status.
    #[must_use]
    pub fn stage_progress(&self) -> Vec<StageProgress> {
        lifecycle::pipeline_progress(self.stage)
    }

    /// Share of milestones completed, as a 0-100 percentage.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn milestone_completion(&self) -> f64 {
        let done = self.milestones.iter().filter(|m| m.completed).count();
        scoring::percentage(done as f64, self.milestones.len() as f64)
    }
}

impl From<Project> for ProjectRecord {
    fn from(project: Project) -> Self {
        Self {
            project_id: project.project_id,
            title: project.title,
            description: project.description,
            deadline: project.deadline,
            classroom_id: project.classroom_id,
            teacher_id: project.teacher_id,
            stage: project.stage.map(|s| s.as_str().to_string()),
            project_type: Some(project.project_type),
            metrics: Some(project.metrics),
            teams: Some(project.teams),
            milestones: Some(project.milestones),
            artifacts: Some(project.artifacts),
        }
    }
}

/// Payload for creating a project.
///
/// Built through [`NewProject::for_classroom`]: the platform only creates
/// team projects, and every project starts in the first workflow stage.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewProject {
    pub title: String,
    pub description: String,
    pub deadline: NaiveDate,
    pub classroom_id: String,
    pub teacher_id: String,
    pub stage: Stage,
    pub project_type: String,
}

impl NewProject {
    /// Build a creation payload for `classroom_id`, pinned to the initial
    /// stage and the platform's project type.
    #[must_use]
    pub fn for_classroom(
        title: String,
        description: String,
        deadline: NaiveDate,
        classroom_id: String,
        teacher_id: String,
    ) -> Self {
        Self {
            title,
            description,
            deadline,
            classroom_id,
            teacher_id,
            stage: Stage::first(),
            project_type: DEFAULT_PROJECT_TYPE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::StageStatus;
    use pretty_assertions::assert_eq;

    fn full_record() -> ProjectRecord {
        serde_json::from_str(
            r#"{
                "project_id": "p-301",
                "title": "Water Quality Study",
                "description": "Test local river samples",
                "deadline": "2025-06-20",
                "classroom_id": "c-12",
                "teacher_id": "t-7",
                "stage": "SYNTHESIS",
                "project_type": "team",
                "metrics": {
                    "completion_percentage": 55.0,
                    "quality_score": 72.0,
                    "efficiency_score": 61.0,
                    "collaboration_score": 80.0
                },
                "teams": [{"team_name": "River Rats", "members": ["ana", "bo"]}],
                "milestones": [
                    {"milestone_id": "m-1", "title": "Collect samples", "completed": true},
                    {"milestone_id": "m-2", "title": "Lab analysis", "due_date": "2025-05-30", "completed": false}
                ],
                "artifacts": [
                    {"artifact_id": "a-1", "file_name": "samples.csv", "uploaded_at": "2025-05-02T14:03:11"}
                ]
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn empty_record_normalizes_to_defaults() {
        let record: ProjectRecord = serde_json::from_str("{}").unwrap();
        let project = record.normalize();

        assert_eq!(project.project_id, "");
        assert_eq!(project.stage, None);
        assert_eq!(project.project_type, DEFAULT_PROJECT_TYPE);
        assert_eq!(project.metrics, Metrics::default());
        assert!(project.teams.is_empty());
        assert!(project.milestones.is_empty());
        assert!(project.artifacts.is_empty());
        assert_eq!(project.display_team().team_name, "No Team");
        assert!(
            project
                .stage_progress()
                .iter()
                .all(|p| p.status == StageStatus::NotStarted)
        );
    }

    #[test]
    fn full_record_normalizes_faithfully() {
        let project = full_record().normalize();

        assert_eq!(project.stage, Some(Stage::Synthesis));
        assert_eq!(project.display_team().team_name, "River Rats");
        assert_eq!(project.metrics.quality_score, 72.0);
        assert_eq!(project.milestones.len(), 2);
        assert!((project.milestone_completion() - 50.0).abs() < 1e-9);
    }

    #[test]
    fn unrecognized_stage_normalizes_to_none() {
        let mut record = full_record();
        record.stage = Some("DESIGN".to_string());
        let project = record.normalize();

        assert_eq!(project.stage, None);
        assert!(
            project
                .stage_progress()
                .iter()
                .all(|p| p.status == StageStatus::NotStarted)
        );
    }

    #[test]
    fn normalize_is_idempotent() {
        let once = full_record().normalize();
        let twice = ProjectRecord::from(once.clone()).normalize();
        assert_eq!(once, twice);

        let empty_once = ProjectRecord::default().normalize();
        let empty_twice = ProjectRecord::from(empty_once.clone()).normalize();
        assert_eq!(empty_once, empty_twice);
    }

    #[test]
    fn creation_payload_is_pinned_to_first_stage_and_team_type() {
        let payload = NewProject::for_classroom(
            "Bridges".to_string(),
            "Design a model bridge".to_string(),
            NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
            "c-12".to_string(),
            "t-7".to_string(),
        );

        assert_eq!(payload.stage, Stage::Questioning);
        assert_eq!(payload.project_type, DEFAULT_PROJECT_TYPE);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["stage"], "QUESTIONING");
        assert_eq!(json["project_type"], "team");
        assert_eq!(json["deadline"], "2025-09-01");
    }
}
