use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum EngagementCommands {
    /// Analyze one student's engagement signals
    Analyze {
        /// Student identifier
        #[arg(long)]
        student: String,

        /// Classroom the student belongs to
        #[arg(long)]
        classroom: String,

        /// Observation window in days (defaults to the service window)
        #[arg(long)]
        window_days: Option<u32>,
    },

    /// Classroom-wide engagement summary
    Class {
        /// Classroom identifier
        classroom_id: String,
    },
}
