use amep_workspace::WorkspaceController;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::WorkspaceCommands;
use crate::commands::shared;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `amep workspace`.
pub async fn handle(
    action: &WorkspaceCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        WorkspaceCommands::View { classroom } => view(classroom.as_deref(), ctx, flags).await,
    }
}

async fn view(
    classroom: Option<&str>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let progress = Progress::spinner("loading workspace");
    let mut controller = WorkspaceController::new(ctx.client.clone(), ctx.teacher_id.clone());

    let preferred = classroom.or_else(|| ctx.default_classroom());
    if let Err(err) = controller.start_with(preferred).await {
        progress.finish_err("workspace load failed");
        return Err(err.into());
    }
    progress.finish_clear();

    output(&shared::snapshot(&controller), flags.format)
}
