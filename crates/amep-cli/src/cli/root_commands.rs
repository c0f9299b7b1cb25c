use clap::{Args, Subcommand};

use super::subcommands::{
    ClassroomCommands, EngagementCommands, PollCommands, ProjectCommands, WorkspaceCommands,
};

/// Top-level `amep` subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a local configuration file
    Init(InitArgs),

    /// Classroom roster operations
    Classroom {
        #[command(subcommand)]
        action: ClassroomCommands,
    },

    /// Teacher workspace (classrooms, active project, pipeline)
    Workspace {
        #[command(subcommand)]
        action: WorkspaceCommands,
    },

    /// Project lifecycle operations
    Project {
        #[command(subcommand)]
        action: ProjectCommands,
    },

    /// Engagement analytics
    Engagement {
        #[command(subcommand)]
        action: EngagementCommands,
    },

    /// Live classroom polls
    Poll {
        #[command(subcommand)]
        action: PollCommands,
    },

    /// Print the JSON schema for a data type
    Schema(SchemaArgs),
}

#[derive(Debug, Args)]
pub struct InitArgs {
    /// Service base URL to write into the config
    #[arg(long)]
    pub base_url: Option<String>,

    /// Teacher identifier to write into the config
    #[arg(long)]
    pub teacher: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(Debug, Args)]
pub struct SchemaArgs {
    /// Type name, e.g. "project" or "class-engagement"
    pub type_name: String,
}
