//! Stage status derivation for the fixed project workflow.
//!
//! The workflow is a strict linear pipeline: every stage before the current
//! one is completed, the current stage is in progress, and every later stage
//! has not started. [`stage_status`] evaluates one candidate stage against an
//! arbitrary stage sequence; [`pipeline_progress`] renders the full canonical
//! pipeline for a project, treating an unrecognized current stage (`None`) as
//! a pipeline where nothing has started.

use std::cmp::Ordering;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{Stage, StageStatus};
use crate::errors::LifecycleError;

/// One row of a rendered workflow pipeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct StageProgress {
    pub stage: Stage,
    pub status: StageStatus,
}

/// Status of `candidate` relative to `current` within `order`.
///
/// Fails with [`LifecycleError::StageNotInSequence`] if either stage is
/// absent from `order`.
pub fn stage_status(
    current: Stage,
    candidate: Stage,
    order: &[Stage],
) -> Result<StageStatus, LifecycleError> {
    let current_pos = position_in(order, current)?;
    let candidate_pos = position_in(order, candidate)?;

    Ok(match candidate_pos.cmp(&current_pos) {
        Ordering::Less => StageStatus::Completed,
        Ordering::Equal => StageStatus::InProgress,
        Ordering::Greater => StageStatus::NotStarted,
    })
}

/// Evaluate every stage of `order` against `current`, in sequence order.
pub fn sequence_progress(
    current: Stage,
    order: &[Stage],
) -> Result<Vec<StageProgress>, LifecycleError> {
    order
        .iter()
        .map(|&candidate| {
            stage_status(current, candidate, order).map(|status| StageProgress {
                stage: candidate,
                status,
            })
        })
        .collect()
}

/// Render the canonical five-stage pipeline for a project.
///
/// `None` means the service reported a stage outside the workflow; the safe
/// rendering is a pipeline where nothing has started.
#[must_use]
pub fn pipeline_progress(current: Option<Stage>) -> Vec<StageProgress> {
    // Every Stage variant appears in PIPELINE, so the lookup cannot fail.
    current.map_or_else(all_not_started, |stage| {
        sequence_progress(stage, &Stage::PIPELINE).unwrap_or_else(|_| all_not_started())
    })
}

fn all_not_started() -> Vec<StageProgress> {
    Stage::PIPELINE
        .iter()
        .map(|&stage| StageProgress {
            stage,
            status: StageStatus::NotStarted,
        })
        .collect()
}

fn position_in(order: &[Stage], stage: Stage) -> Result<usize, LifecycleError> {
    order
        .iter()
        .position(|&s| s == stage)
        .ok_or(LifecycleError::StageNotInSequence { stage })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn earlier_stage_is_completed() {
        let status = stage_status(Stage::Synthesis, Stage::Questioning, &Stage::PIPELINE).unwrap();
        assert_eq!(status, StageStatus::Completed);
    }

    #[test]
    fn current_stage_is_in_progress() {
        let status = stage_status(Stage::Synthesis, Stage::Synthesis, &Stage::PIPELINE).unwrap();
        assert_eq!(status, StageStatus::InProgress);
    }

    #[test]
    fn later_stage_is_not_started() {
        let status = stage_status(Stage::Synthesis, Stage::Reflection, &Stage::PIPELINE).unwrap();
        assert_eq!(status, StageStatus::NotStarted);
    }

    #[test]
    fn candidate_outside_sequence_is_rejected() {
        let order = [Stage::Questioning, Stage::Research];
        let err = stage_status(Stage::Questioning, Stage::Reflection, &order).unwrap_err();
        assert!(matches!(
            err,
            LifecycleError::StageNotInSequence {
                stage: Stage::Reflection
            }
        ));
    }

    #[test]
    fn current_outside_sequence_is_rejected() {
        let order = [Stage::Questioning, Stage::Research];
        let err = stage_status(Stage::Reflection, Stage::Questioning, &order).unwrap_err();
        assert!(matches!(
            err,
            LifecycleError::StageNotInSequence {
                stage: Stage::Reflection
            }
        ));
    }

    #[test]
    fn works_over_arbitrary_orders() {
        // Sequence semantics depend only on positions, not pipeline order.
        let order = [Stage::Reflection, Stage::Questioning, Stage::Synthesis];
        let progress = sequence_progress(Stage::Questioning, &order).unwrap();
        assert_eq!(
            progress,
            vec![
                StageProgress {
                    stage: Stage::Reflection,
                    status: StageStatus::Completed
                },
                StageProgress {
                    stage: Stage::Questioning,
                    status: StageStatus::InProgress
                },
                StageProgress {
                    stage: Stage::Synthesis,
                    status: StageStatus::NotStarted
                },
            ]
        );
    }

    #[test]
    fn exactly_one_stage_in_progress_for_every_current() {
        for current in Stage::PIPELINE {
            let progress = pipeline_progress(Some(current));
            let in_progress: Vec<_> = progress
                .iter()
                .filter(|p| p.status == StageStatus::InProgress)
                .collect();
            assert_eq!(in_progress.len(), 1, "current stage {current}");
            assert_eq!(in_progress[0].stage, current);
        }
    }

    #[test]
    fn pipeline_splits_around_current_stage() {
        let progress = pipeline_progress(Some(Stage::Presentation));
        let statuses: Vec<_> = progress.iter().map(|p| p.status).collect();
        assert_eq!(
            statuses,
            vec![
                StageStatus::Completed,
                StageStatus::Completed,
                StageStatus::Completed,
                StageStatus::InProgress,
                StageStatus::NotStarted,
            ]
        );
    }

    #[test]
    fn unknown_current_stage_renders_nothing_started() {
        let progress = pipeline_progress(None);
        assert_eq!(progress.len(), Stage::PIPELINE.len());
        assert!(progress.iter().all(|p| p.status == StageStatus::NotStarted));
    }
}
