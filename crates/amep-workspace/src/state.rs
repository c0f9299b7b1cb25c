//! Workspace controller states.

use std::fmt;

use amep_core::entities::Project;

/// Where the controller is in its load/create cycle.
///
/// `ProjectsLoaded` is the settled state: `None` means the selected
/// classroom has no projects yet, `Some` holds the first project's
/// normalized detail.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkspaceState {
    Idle,
    LoadingClassrooms,
    ClassroomsLoaded,
    LoadingProjects,
    ProjectsLoaded(Option<Box<Project>>),
    CreatingProject,
    Failed { message: String },
}

impl WorkspaceState {
    /// Snake-case state tag, for logs and CLI output.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::LoadingClassrooms => "loading_classrooms",
            Self::ClassroomsLoaded => "classrooms_loaded",
            Self::LoadingProjects => "loading_projects",
            Self::ProjectsLoaded(_) => "projects_loaded",
            Self::CreatingProject => "creating_project",
            Self::Failed { .. } => "failed",
        }
    }

    /// Whether the controller has settled on a project view.
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        matches!(self, Self::ProjectsLoaded(_))
    }
}

impl fmt::Display for WorkspaceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
