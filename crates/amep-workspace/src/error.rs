//! Workspace controller errors.

use amep_client::ServiceError;
use thiserror::Error;

/// Errors from workspace sequencing.
#[derive(Debug, Error)]
pub enum WorkspaceError {
    /// A service call failed.
    #[error(transparent)]
    Service(#[from] ServiceError),

    /// The operation needs a selected classroom and none is selected.
    #[error("no classroom selected")]
    NoClassroomSelected,

    /// The requested classroom is not in the loaded list.
    #[error("unknown classroom '{classroom_id}'")]
    UnknownClassroom { classroom_id: String },

    /// The controller's current state forbids the requested operation.
    #[error("cannot {action} while {state}")]
    InvalidState {
        action: &'static str,
        state: &'static str,
    },

    /// A required draft field was blank.
    #[error("required field '{field}' is empty")]
    EmptyField { field: &'static str },
}
