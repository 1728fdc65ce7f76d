use anyhow::Context;
use serde_json::json;

use crate::cli::OutputFormat;
use crate::cli::commands::DeleteArgs;
use crate::context::AppContext;
use crate::output;

/// Handle `siteline delete`.
pub async fn handle(args: &DeleteArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let board = ctx.board();
    board.refresh().await.context("failed to load board")?;
    board.delete_task(&args.task_id).await?;

    if ctx.flags.format == OutputFormat::Json {
        output::print_json(&json!({ "taskId": args.task_id, "deleted": true }))?;
    }
    Ok(())
}
