use amep_core::entities::{NewPoll, NewPollAnswer};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PollCommands;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

/// Handle `amep poll`.
pub async fn handle(
    action: &PollCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PollCommands::Create { question, option } => {
            create(question.clone(), option.clone(), ctx, flags).await
        }
        PollCommands::Respond {
            poll_id,
            student,
            option,
            response_time,
        } => {
            respond(
                poll_id,
                student.clone(),
                option.clone(),
                *response_time,
                ctx,
                flags,
            )
            .await
        }
        PollCommands::Results { poll_id } => results(poll_id, ctx, flags).await,
    }
}

async fn create(
    question: String,
    options: Vec<String>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let payload = NewPoll::multiple_choice(ctx.teacher_id.clone(), question, options);

    let progress = Progress::spinner("creating poll");
    match ctx.client.create_poll(&payload).await {
        Ok(poll) => {
            progress.finish_ok("poll created");
            output(&poll, flags.format)
        }
        Err(err) => {
            progress.finish_err("poll creation failed");
            Err(err.into())
        }
    }
}

async fn respond(
    poll_id: &str,
    student: String,
    option: String,
    response_time: Option<f64>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let payload = NewPollAnswer {
        student_id: student,
        selected_option: option,
        response_time,
    };

    let progress = Progress::spinner("recording answer");
    match ctx.client.respond_to_poll(poll_id, &payload).await {
        Ok(answer) => {
            progress.finish_clear();
            output(&answer, flags.format)
        }
        Err(err) => {
            progress.finish_err("answer submission failed");
            Err(err.into())
        }
    }
}

async fn results(poll_id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let progress = Progress::spinner("loading poll results");
    match ctx.client.poll_results(poll_id).await {
        Ok(results) => {
            progress.finish_clear();
            output(&results, flags.format)
        }
        Err(err) => {
            progress.finish_err("poll results load failed");
            Err(err.into())
        }
    }
}
