//! Entity structs for all AMEP domain objects.
//!
//! Field names match the service's JSON payloads one-to-one. All structs
//! derive `Serialize`, `Deserialize`, and `JsonSchema` for JSON roundtrip and
//! schema validation. Timestamps from the service are naive UTC (ISO 8601
//! without an offset), dates are `YYYY-MM-DD`.

mod artifact;
mod classroom;
mod engagement;
mod metrics;
mod milestone;
mod poll;
mod project;
mod team;

pub use artifact::Artifact;
pub use classroom::Classroom;
pub use engagement::{
    ClassEngagement, EngagementAnalysis, EngagementDistribution, EngagementSignals, StudentAlert,
};
pub use metrics::Metrics;
pub use milestone::Milestone;
pub use poll::{
    DEFAULT_POLL_TYPE, NewPoll, NewPollAnswer, Poll, PollAnswer, PollOptionCount, PollResults,
};
pub use project::{DEFAULT_PROJECT_TYPE, NewProject, Project, ProjectRecord, ProjectSummary};
pub use team::{PLACEHOLDER_TEAM_NAME, Team};
