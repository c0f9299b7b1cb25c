use clap::Subcommand;

#[derive(Debug, Subcommand)]
pub enum PollCommands {
    /// Create a multiple-choice poll
    Create {
        /// Poll question
        #[arg(long)]
        question: String,

        /// Answer option (repeat for each choice)
        #[arg(long, required = true)]
        option: Vec<String>,
    },

    /// Record a student's answer to a poll
    Respond {
        /// Poll identifier
        poll_id: String,

        /// Student identifier
        #[arg(long)]
        student: String,

        /// Selected option text
        #[arg(long)]
        option: String,

        /// Seconds the student took to answer
        #[arg(long)]
        response_time: Option<f64>,
    },

    /// Show aggregated poll results
    Results {
        /// Poll identifier
        poll_id: String,
    },
}
