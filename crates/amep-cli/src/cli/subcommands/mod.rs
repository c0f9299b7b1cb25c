mod classroom;
mod engagement;
mod poll;
mod project;
mod workspace;

pub use classroom::ClassroomCommands;
pub use engagement::EngagementCommands;
pub use poll::PollCommands;
pub use project::ProjectCommands;
pub use workspace::WorkspaceCommands;
