pub mod board;
pub mod delete;
pub mod move_task;
pub mod projects;
pub mod watch;

use crate::cli::Commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: &Commands, ctx: &AppContext) -> anyhow::Result<()> {
    match command {
        Commands::Board(args) => board::handle(args, ctx).await,
        Commands::Move(args) => move_task::handle(args, ctx).await,
        Commands::Delete(args) => delete::handle(args, ctx).await,
        Commands::Projects => projects::handle(ctx).await,
        Commands::Watch(args) => watch::handle(args, ctx).await,
    }
}
