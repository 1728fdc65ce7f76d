use anyhow::Context;
use serde_json::json;
use site_board::MoveOutcome;

use crate::cli::OutputFormat;
use crate::cli::commands::MoveArgs;
use crate::context::AppContext;
use crate::output;

/// Handle `siteline move`.
///
/// The board is loaded first so the move is validated against the columns
/// as the server currently reports them.
pub async fn handle(args: &MoveArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let board = ctx.board();
    board.refresh().await.context("failed to load board")?;

    let outcome = board
        .move_task(&args.task_id, args.from, args.to, args.index)
        .await?;

    let snapshot = board.snapshot();
    let position = snapshot
        .column(args.to)
        .tasks
        .iter()
        .position(|t| t.id == args.task_id);

    match ctx.flags.format {
        OutputFormat::Json => output::print_json(&json!({
            "taskId": args.task_id,
            "from": args.from,
            "to": args.to,
            "index": position,
            "outcome": match outcome {
                MoveOutcome::Reordered => "reordered",
                MoveOutcome::Moved => "moved",
            },
        })),
        OutputFormat::Table => {
            if outcome == MoveOutcome::Reordered && !ctx.flags.quiet {
                println!(
                    "reordered {} within {}",
                    args.task_id,
                    args.to.label()
                );
            }
            Ok(())
        }
    }
}
