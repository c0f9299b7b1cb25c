use chrono::NaiveDate;

use amep_workspace::{ProjectDraft, WorkspaceController};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProjectCommands;
use crate::commands::shared;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `amep project`.
pub async fn handle(
    action: &ProjectCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProjectCommands::Create {
            title,
            description,
            deadline,
            classroom,
        } => {
            create(
                title.clone(),
                description.clone(),
                *deadline,
                classroom.as_deref(),
                ctx,
                flags,
            )
            .await
        }
    }
}

/// Create a project in the selected classroom, then print the reloaded
/// workspace. Creation only happens from a settled workspace, so the
/// classrooms are loaded first.
async fn create(
    title: String,
    description: String,
    deadline: NaiveDate,
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
    let progress = Progress::spinner("creating project");
    let draft = ProjectDraft {
        title,
        description,
        deadline,
    };
    if let Err(err) = controller.create_project(draft).await {
        progress.finish_err("project creation failed");
        return Err(err.into());
    }
    progress.finish_ok("project created");

    output(&shared::snapshot(&controller), flags.format)
}
