use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Classroom { action } => commands::classroom::handle(&action, ctx, flags).await,
        Commands::Workspace { action } => commands::workspace::handle(&action, ctx, flags).await,
        Commands::Project { action } => commands::project::handle(&action, ctx, flags).await,
        Commands::Engagement { action } => commands::engagement::handle(&action, ctx, flags).await,
        Commands::Poll { action } => commands::poll::handle(&action, ctx, flags).await,
        Commands::Init(_) | Commands::Schema(_) => {
            unreachable!("init and schema are pre-dispatched in main")
        }
    }
}
