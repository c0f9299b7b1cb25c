use amep_core::entities::EngagementSignals;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EngagementCommands;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `amep engagement`.
pub async fn handle(
    action: &EngagementCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EngagementCommands::Analyze {
            student,
            classroom,
            window_days,
        } => analyze(student.clone(), classroom.clone(), *window_days, ctx, flags).await,
        EngagementCommands::Class { classroom_id } => class(classroom_id, ctx, flags).await,
    }
}

async fn analyze(
    student: String,
    classroom: String,
    window_days: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut signals = EngagementSignals::new(student, classroom);
    if let Some(days) = window_days {
        signals.window_days = days;
    }

    let progress = Progress::spinner("analyzing engagement");
    match ctx.client.analyze_engagement(&signals).await {
        Ok(analysis) => {
            progress.finish_clear();
            output(&analysis, flags.format)
        }
        Err(err) => {
            progress.finish_err("engagement analysis failed");
            Err(err.into())
        }
    }
}

async fn class(classroom_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let progress = Progress::spinner("loading class engagement");
    match ctx.client.class_engagement(classroom_id).await {
        Ok(summary) => {
            progress.finish_clear();
            output(&summary, flags.format)
        }
        Err(err) => {
            progress.finish_err("class engagement load failed");
            Err(err.into())
        }
    }
}
