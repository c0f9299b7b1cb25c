use chrono::NaiveDate;
use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum ProjectCommands {
    /// Create a project in a classroom and reload the workspace
    Create {
        /// Project title
        #[arg(long)]
        title: String,

        /// Driving question or project description
        #[arg(long)]
        description: String,

        /// Due date, YYYY-MM-DD
        #[arg(long)]
        deadline: NaiveDate,

        /// Classroom to create the project in (defaults to the selected classroom)
        #[arg(long)]
        classroom: Option<String>,
    },
}
