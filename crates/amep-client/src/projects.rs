//! Project listing, detail retrieval, and creation endpoints.

use amep_core::entities::{NewProject, Project, ProjectRecord, ProjectSummary};

use crate::{ServiceClient, error::ServiceError, http::check_response};

#[derive(serde::Deserialize)]
struct ProjectListResponse {
    #[serde(default)]
    projects: Vec<ProjectSummary>,
}

impl ServiceClient {
    /// List the projects of `classroom_id` as trimmed summaries.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the HTTP request fails or the service
    /// returns a non-success status.
    pub async fn fetch_projects(
        &self,
        classroom_id: &str,
    ) -> Result<Vec<ProjectSummary>, ServiceError> {
        let url = format!(
            "{}/projects/classroom/{}",
            self.base_url,
            urlencoding::encode(classroom_id)
        );
        let resp = check_response(self.http.get(&url).send().await?).await?;
        let data: ProjectListResponse = resp.json().await?;
        Ok(data.projects)
    }

    /// Fetch one project's full record and normalize it for display.
    ///
    /// Records may omit `metrics`, `teams`, `milestones`, and `artifacts`;
    /// the returned [`Project`] always has every field populated.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the HTTP request fails or the service
    /// returns a non-success status.
    pub async fn fetch_project_detail(&self, project_id: &str) -> Result<Project, ServiceError> {
        let url = format!(
            "{}/projects/{}",
            self.base_url,
            urlencoding::encode(project_id)
        );
        let resp = check_response(self.http.get(&url).send().await?).await?;
        let record: ProjectRecord = resp.json().await?;
        Ok(record.normalize())
    }

    /// Create a project. Returns the created summary.
    ///
    /// Use [`NewProject::for_classroom`] to build the payload; it pins the
    /// stage and project type the service expects for new projects.
    ///
    /// # Errors
    ///
    /// Returns [`ServiceError`] if the HTTP request fails or the service
    /// returns a non-success status.
    pub async fn create_project(
        &self,
        project: &NewProject,
    ) -> Result<ProjectSummary, ServiceError> {
        let url = format!("{}/projects", self.base_url);
        let resp = check_response(self.http.post(&url).json(project).send().await?).await?;
        Ok(resp.json().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amep_core::enums::Stage;

    const LIST_FIXTURE: &str = r#"{
        "projects": [
            {
                "project_id": "p-301",
                "title": "Water Quality Study",
                "stage": "RESEARCH",
                "project_type": "team"
            },
            {
                "project_id": "p-302",
                "title": "Bridge Design"
            }
        ]
    }"#;

    const DETAIL_FIXTURE: &str = r#"{
        "project_id": "p-301",
        "title": "Water Quality Study",
        "description": "Test local river samples",
        "deadline": "2025-06-20",
        "classroom_id": "c-12",
        "teacher_id": "t-7",
        "stage": "RESEARCH"
    }"#;

    #[test]
    fn project_list_envelope_parses() {
        let data: ProjectListResponse = serde_json::from_str(LIST_FIXTURE).unwrap();
        assert_eq!(data.projects.len(), 2);
        assert_eq!(data.projects[0].stage.as_deref(), Some("RESEARCH"));
        // Older summaries omit stage and type entirely.
        assert_eq!(data.projects[1].stage, None);
        assert_eq!(data.projects[1].project_type, None);
    }

    #[test]
    fn empty_and_missing_project_arrays_parse() {
        let empty: ProjectListResponse = serde_json::from_str(r#"{"projects": []}"#).unwrap();
        assert!(empty.projects.is_empty());

        let missing: ProjectListResponse = serde_json::from_str("{}").unwrap();
        assert!(missing.projects.is_empty());
    }

    #[test]
    fn partial_detail_record_normalizes_with_defaults() {
        let record: ProjectRecord = serde_json::from_str(DETAIL_FIXTURE).unwrap();
        let project = record.normalize();

        assert_eq!(project.stage, Some(Stage::Research));
        assert_eq!(project.metrics.completion_percentage, 0.0);
        assert!(project.teams.is_empty());
        assert!(project.milestones.is_empty());
        assert!(project.artifacts.is_empty());
        assert_eq!(project.display_team().team_name, "No Team");
    }

    #[test]
    fn created_summary_parses() {
        let summary: ProjectSummary = serde_json::from_str(
            r#"{"project_id": "p-303", "title": "Bridges", "stage": "QUESTIONING", "project_type": "team"}"#,
        )
        .unwrap();
        assert_eq!(summary.project_id, "p-303");
        assert_eq!(summary.stage.as_deref(), Some("QUESTIONING"));
    }
}
