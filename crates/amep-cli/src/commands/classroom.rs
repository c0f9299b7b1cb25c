use serde::Serialize;

use amep_core::entities::Classroom;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ClassroomCommands;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct ClassroomListResponse {
    classrooms: Vec<Classroom>,
}

/// Handle `amep classroom`.
pub async fn handle(
    action: &ClassroomCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ClassroomCommands::List => list(ctx, flags).await,
    }
}

async fn list(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let progress = Progress::spinner("loading classrooms");
    let classrooms = match ctx.client.fetch_classrooms(&ctx.teacher_id).await {
        Ok(classrooms) => classrooms,
        Err(err) => {
            progress.finish_err("classroom load failed");
            return Err(err.into());
        }
    };
    progress.finish_clear();

    output(&ClassroomListResponse { classrooms }, flags.format)
}
