use anyhow::bail;
use schemars::{Schema, schema_for};

use amep_core::entities::{
    Artifact, ClassEngagement, Classroom, EngagementAnalysis, Metrics, Milestone, NewProject,
    Poll, PollResults, Project, ProjectRecord, ProjectSummary, Team,
};
use amep_core::lifecycle::StageProgress;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Type names `amep schema` accepts.
const SUPPORTED: [&str; 14] = [
    "classroom",
    "team",
    "milestone",
    "artifact",
    "metrics",
    "project",
    "project-record",
    "project-summary",
    "new-project",
    "stage-progress",
    "engagement-analysis",
    "class-engagement",
    "poll",
    "poll-results",
];

/// Handle `amep schema`: print the JSON schema for one wire type.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let Some(schema) = schema_by_name(&args.type_name) else {
        bail!(
            "unknown schema type '{}' (supported: {})",
            args.type_name,
            SUPPORTED.join(", ")
        );
    };
    output(&schema, flags.format)
}

fn schema_by_name(name: &str) -> Option<Schema> {
    match name {
        "classroom" => Some(schema_for!(Classroom)),
        "team" => Some(schema_for!(Team)),
        "milestone" => Some(schema_for!(Milestone)),
        "artifact" => Some(schema_for!(Artifact)),
        "metrics" => Some(schema_for!(Metrics)),
        "project" => Some(schema_for!(Project)),
        "project-record" => Some(schema_for!(ProjectRecord)),
        "project-summary" => Some(schema_for!(ProjectSummary)),
        "new-project" => Some(schema_for!(NewProject)),
        "stage-progress" => Some(schema_for!(StageProgress)),
        "engagement-analysis" => Some(schema_for!(EngagementAnalysis)),
        "class-engagement" => Some(schema_for!(ClassEngagement)),
        "poll" => Some(schema_for!(Poll)),
        "poll-results" => Some(schema_for!(PollResults)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::{SUPPORTED, schema_by_name};

    #[test]
    fn every_supported_name_resolves() {
        for name in SUPPORTED {
            assert!(schema_by_name(name).is_some(), "no schema for '{name}'");
        }
    }

    #[test]
    fn unknown_name_resolves_to_none() {
        assert!(schema_by_name("homework").is_none());
        assert!(schema_by_name("").is_none());
    }

    #[test]
    fn project_schema_names_the_pipeline_fields() {
        let schema = schema_by_name("project").unwrap();
        let json = serde_json::to_value(&schema).unwrap();
        let properties = json["properties"].as_object().unwrap();
        assert!(properties.contains_key("stage"));
        assert!(properties.contains_key("milestones"));
        assert!(properties.contains_key("metrics"));
    }
}
