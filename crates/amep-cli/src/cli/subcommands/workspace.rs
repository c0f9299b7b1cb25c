use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum WorkspaceCommands {
    /// Load classrooms and show the active project for one of them
    View {
        /// Classroom to select (defaults to the configured or first classroom)
        #[arg(long)]
        classroom: Option<String>,
    },
}
