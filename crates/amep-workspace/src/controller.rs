//! Workspace sequencing over the project service.
//!
//! `WorkspaceController` drives a fixed cycle: load classrooms, select one,
//! load its project list, expand the first project into full detail. Every
//! mutation of the workspace re-enters that cycle rather than patching
//! local state incrementally.

use amep_client::{ProjectService, ServiceError};
use amep_core::entities::{Classroom, NewProject, Project};
use chrono::NaiveDate;

use crate::error::WorkspaceError;
use crate::state::WorkspaceState;

/// A teacher-authored project draft, validated before submission.
///
/// Stage and project type are not part of the draft: creation always pins
/// them through [`NewProject::for_classroom`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub deadline: NaiveDate,
}

impl ProjectDraft {
    /// Reject drafts with blank required fields.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::EmptyField`] naming the first blank field.
    pub fn validate(&self) -> Result<(), WorkspaceError> {
        if self.title.trim().is_empty() {
            return Err(WorkspaceError::EmptyField { field: "title" });
        }
        if self.description.trim().is_empty() {
            return Err(WorkspaceError::EmptyField {
                field: "description",
            });
        }
        Ok(())
    }
}

/// Sequences the four service calls behind the teacher workspace view.
///
/// Failures during loading settle in [`WorkspaceState::Failed`] and are
/// never retried automatically; a failed creation instead restores the
/// settled state it started from. Only the first project of a classroom is
/// ever expanded into detail (single active project per classroom).
pub struct WorkspaceController<S> {
    service: S,
    teacher_id: String,
    classrooms: Vec<Classroom>,
    selected_classroom: Option<String>,
    state: WorkspaceState,
}

impl<S: ProjectService> WorkspaceController<S> {
    /// A controller for `teacher_id`, idle until [`start`](Self::start).
    #[must_use]
    pub const fn new(service: S, teacher_id: String) -> Self {
        Self {
            service,
            teacher_id,
            classrooms: Vec::new(),
            selected_classroom: None,
            state: WorkspaceState::Idle,
        }
    }

    /// Current controller state.
    #[must_use]
    pub const fn state(&self) -> &WorkspaceState {
        &self.state
    }

    /// Classrooms loaded by [`start`](Self::start).
    #[must_use]
    pub fn classrooms(&self) -> &[Classroom] {
        &self.classrooms
    }

    /// The selected classroom id, if any.
    #[must_use]
    pub fn selected_classroom(&self) -> Option<&str> {
        self.selected_classroom.as_deref()
    }

    /// The loaded project, when the workspace has settled on one.
    #[must_use]
    pub fn current_project(&self) -> Option<&Project> {
        match &self.state {
            WorkspaceState::ProjectsLoaded(project) => project.as_deref(),
            _ => None,
        }
    }

    /// The service this controller drives.
    #[must_use]
    pub const fn service(&self) -> &S {
        &self.service
    }

    /// Load the teacher's classrooms and settle the workspace.
    ///
    /// The first classroom is auto-selected and its projects loaded. With
    /// no classrooms at all the workspace settles empty, with nothing to
    /// query.
    ///
    /// # Errors
    ///
    /// Returns the underlying service error on any failed call; the
    /// controller lands in [`WorkspaceState::Failed`].
    pub async fn start(&mut self) -> Result<(), WorkspaceError> {
        self.start_with(None).await
    }

    /// Like [`start`](Self::start), but select `preferred` when it is in
    /// the loaded list. An unknown preference falls back to the first
    /// classroom.
    ///
    /// # Errors
    ///
    /// Returns the underlying service error on any failed call; the
    /// controller lands in [`WorkspaceState::Failed`].
    pub async fn start_with(&mut self, preferred: Option<&str>) -> Result<(), WorkspaceError> {
        self.state = WorkspaceState::LoadingClassrooms;
        let classrooms = match self.service.fetch_classrooms(&self.teacher_id).await {
            Ok(classrooms) => classrooms,
            Err(err) => return Err(self.fail(err)),
        };
        tracing::debug!(count = classrooms.len(), "classrooms loaded");
        self.classrooms = classrooms;
        self.state = WorkspaceState::ClassroomsLoaded;

        let Some(selected) = self.resolve_selection(preferred) else {
            // Nothing to query; the workspace settles empty.
            self.selected_classroom = None;
            self.state = WorkspaceState::ProjectsLoaded(None);
            return Ok(());
        };
        self.selected_classroom = Some(selected.clone());
        self.load_projects(&selected).await
    }

    /// Switch to `classroom_id` and load its projects.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::UnknownClassroom`] for an id outside the
    /// loaded list, without touching the current state; otherwise the
    /// underlying service error if loading fails.
    pub async fn select_classroom(&mut self, classroom_id: &str) -> Result<(), WorkspaceError> {
        if !self.knows_classroom(classroom_id) {
            return Err(WorkspaceError::UnknownClassroom {
                classroom_id: classroom_id.to_string(),
            });
        }
        self.selected_classroom = Some(classroom_id.to_string());
        self.load_projects(classroom_id).await
    }

    /// Create a project in the selected classroom and reload the
    /// workspace.
    ///
    /// The payload is pinned to the first workflow stage and the team
    /// project type regardless of draft content. On a failed creation the
    /// prior settled state is restored and the error returned.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::InvalidState`] outside a settled state,
    /// [`WorkspaceError::NoClassroomSelected`] with no classroom,
    /// [`WorkspaceError::EmptyField`] for a blank draft field, or the
    /// underlying service error.
    pub async fn create_project(&mut self, draft: ProjectDraft) -> Result<(), WorkspaceError> {
        if !self.state.is_settled() {
            return Err(WorkspaceError::InvalidState {
                action: "create a project",
                state: self.state.name(),
            });
        }
        let Some(classroom_id) = self.selected_classroom.clone() else {
            return Err(WorkspaceError::NoClassroomSelected);
        };
        draft.validate()?;

        let payload = NewProject::for_classroom(
            draft.title,
            draft.description,
            draft.deadline,
            classroom_id.clone(),
            self.teacher_id.clone(),
        );

        let prior = std::mem::replace(&mut self.state, WorkspaceState::CreatingProject);
        match self.service.create_project(&payload).await {
            Ok(summary) => {
                tracing::info!(project_id = %summary.project_id, "project created");
                self.load_projects(&classroom_id).await
            }
            Err(err) => {
                // Leave the workspace exactly as it was before the attempt.
                tracing::warn!(error = %err, "project creation failed");
                self.state = prior;
                Err(err.into())
            }
        }
    }

    /// Re-run the load cycle for the currently selected classroom.
    ///
    /// # Errors
    ///
    /// Returns [`WorkspaceError::NoClassroomSelected`] if nothing is
    /// selected, or the underlying service error.
    pub async fn refresh(&mut self) -> Result<(), WorkspaceError> {
        let Some(classroom_id) = self.selected_classroom.clone() else {
            return Err(WorkspaceError::NoClassroomSelected);
        };
        self.load_projects(&classroom_id).await
    }

    /// Load the project list for `classroom_id` and expand the first
    /// summary into full detail.
    async fn load_projects(&mut self, classroom_id: &str) -> Result<(), WorkspaceError> {
        self.state = WorkspaceState::LoadingProjects;
        let summaries = match self.service.fetch_projects(classroom_id).await {
            Ok(summaries) => summaries,
            Err(err) => return Err(self.fail(err)),
        };

        // Single active project per classroom: only the first summary is
        // expanded.
        let Some(first) = summaries.first() else {
            self.state = WorkspaceState::ProjectsLoaded(None);
            return Ok(());
        };
        match self.service.fetch_project_detail(&first.project_id).await {
            Ok(project) => {
                tracing::debug!(project_id = %project.project_id, "workspace settled");
                self.state = WorkspaceState::ProjectsLoaded(Some(Box::new(project)));
                Ok(())
            }
            Err(err) => Err(self.fail(err)),
        }
    }

    /// Record a service failure in the state and hand the error back.
    fn fail(&mut self, err: ServiceError) -> WorkspaceError {
        tracing::warn!(error = %err, state = %self.state, "workspace operation failed");
        self.state = WorkspaceState::Failed {
            message: err.to_string(),
        };
        WorkspaceError::Service(err)
    }

    fn knows_classroom(&self, classroom_id: &str) -> bool {
        self.classrooms
            .iter()
            .any(|c| c.classroom_id == classroom_id)
    }

    fn resolve_selection(&self, preferred: Option<&str>) -> Option<String> {
        preferred
            .filter(|id| self.knows_classroom(id))
            .map(String::from)
            .or_else(|| self.classrooms.first().map(|c| c.classroom_id.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(title: &str, description: &str) -> ProjectDraft {
        ProjectDraft {
            title: title.to_string(),
            description: description.to_string(),
            deadline: NaiveDate::from_ymd_opt(2025, 9, 1).unwrap(),
        }
    }

    #[test]
    fn validate_rejects_blank_title() {
        let err = draft("   ", "Test river samples").validate().unwrap_err();
        assert!(matches!(err, WorkspaceError::EmptyField { field: "title" }));
    }

    #[test]
    fn validate_rejects_blank_description() {
        let err = draft("Water Quality Study", "").validate().unwrap_err();
        assert!(matches!(
            err,
            WorkspaceError::EmptyField {
                field: "description"
            }
        ));
    }

    #[test]
    fn validate_accepts_filled_draft() {
        assert!(
            draft("Water Quality Study", "Test river samples")
                .validate()
                .is_ok()
        );
    }
}
