use site_board::BoardError;
use site_core::enums::Column;

use crate::cli::commands::BoardArgs;
use crate::context::AppContext;
use crate::output;

/// Handle `siteline board`.
pub async fn handle(args: &BoardArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let board = ctx.board();
    match board.apply_filters(args.filter.to_filter()).await {
        Ok(()) | Err(BoardError::ReadPermissionDenied { .. }) => {}
        Err(error) => return Err(error.into()),
    }

    if args.all_pages {
        for column in Column::ALL {
            while board.load_next_page(column).await?.is_some() {}
        }
    }

    output::print_board(&board.snapshot(), ctx.flags.format)
}
