use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum ClassroomCommands {
    /// List the teacher's classrooms
    List,
}
