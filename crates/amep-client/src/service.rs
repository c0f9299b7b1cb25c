//! Capability trait over the project-workspace operations.

use amep_core::entities::{Classroom, NewProject, Project, ProjectSummary};

use crate::{ServiceClient, error::ServiceError};

/// The four service operations the workspace controller sequences.
///
/// `ServiceClient` is the production implementation; tests substitute
/// in-memory fakes.
#[async_trait::async_trait]
pub trait ProjectService: Send + Sync {
    /// List the classrooms taught by `teacher_id`.
    async fn fetch_classrooms(&self, teacher_id: &str) -> Result<Vec<Classroom>, ServiceError>;

    /// List project summaries for one classroom.
    async fn fetch_projects(
        &self,
        classroom_id: &str,
    ) -> Result<Vec<ProjectSummary>, ServiceError>;

    /// Fetch one project's full record, normalized.
    async fn fetch_project_detail(&self, project_id: &str) -> Result<Project, ServiceError>;

    /// Create a project and return the service's summary of it.
    async fn create_project(&self, project: &NewProject) -> Result<ProjectSummary, ServiceError>;
}

#[async_trait::async_trait]
impl ProjectService for ServiceClient {
    async fn fetch_classrooms(&self, teacher_id: &str) -> Result<Vec<Classroom>, ServiceError> {
        Self::fetch_classrooms(self, teacher_id).await
    }

    async fn fetch_projects(
        &self,
        classroom_id: &str,
    ) -> Result<Vec<ProjectSummary>, ServiceError> {
        Self::fetch_projects(self, classroom_id).await
    }

    async fn fetch_project_detail(&self, project_id: &str) -> Result<Project, ServiceError> {
        Self::fetch_project_detail(self, project_id).await
    }

    async fn create_project(&self, project: &NewProject) -> Result<ProjectSummary, ServiceError> {
        Self::create_project(self, project).await
    }
}
