//! Response shapes shared by the workspace-driven commands.

use amep_client::ProjectService;
use amep_core::entities::{Classroom, Project};
use amep_core::enums::MasteryLevel;
use amep_core::lifecycle::StageProgress;
use amep_workspace::WorkspaceController;
use chrono::NaiveDate;
use serde::Serialize;

/// What `workspace view` and `project create` print: the controller's
/// settled position plus a display-ready expansion of the active project.
#[derive(Debug, Serialize)]
pub struct WorkspaceView {
    pub state: String,
    pub classrooms: Vec<Classroom>,
    pub selected_classroom: Option<String>,
    pub project: Option<ProjectView>,
}

/// A normalized project flattened for output: the pipeline, the display
/// team, and the derived scores all precomputed.
#[derive(Debug, Serialize)]
pub struct ProjectView {
    pub project_id: String,
    pub title: String,
    pub description: String,
    pub deadline: Option<NaiveDate>,
    pub stage: Option<String>,
    pub team: String,
    pub members: Vec<String>,
    pub pipeline: Vec<StageProgress>,
    pub milestone_completion: f64,
    pub overall_score: f64,
    pub mastery: MasteryLevel,
}

impl ProjectView {
    #[must_use]
    pub fn from_project(project: &Project) -> Self {
        let team = project.display_team();
        Self {
            project_id: project.project_id.clone(),
            title: project.title.clone(),
            description: project.description.clone(),
            deadline: project.deadline,
            stage: project.stage.map(|stage| stage.as_str().to_string()),
            team: team.team_name,
            members: team.members,
            pipeline: project.stage_progress(),
            milestone_completion: project.milestone_completion(),
            overall_score: project.metrics.overall(),
            mastery: project.metrics.mastery(),
        }
    }
}

/// Snapshot a controller into the printable view.
pub fn snapshot<S: ProjectService>(controller: &WorkspaceController<S>) -> WorkspaceView {
    WorkspaceView {
        state: controller.state().name().to_string(),
        classrooms: controller.classrooms().to_vec(),
        selected_classroom: controller.selected_classroom().map(String::from),
        project: controller.current_project().map(ProjectView::from_project),
    }
}
