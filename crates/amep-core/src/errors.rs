//! Workflow error types.

use thiserror::Error;

use crate::enums::Stage;

/// Errors from stage parsing and stage status derivation.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// A stage value from the service is not one of the workflow stages.
    #[error("invalid stage '{stage}': not a workflow stage")]
    InvalidStage {
        /// The raw stage value as received.
        stage: String,
    },

    /// A stage is missing from the sequence being evaluated.
    #[error("stage '{stage}' is not part of the stage sequence")]
    StageNotInSequence {
        /// The stage that was not found.
        stage: Stage,
    },
}
