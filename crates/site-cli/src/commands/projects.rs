use anyhow::Context;

use crate::context::AppContext;
use crate::output;

/// Handle `siteline projects`.
pub async fn handle(ctx: &AppContext) -> anyhow::Result<()> {
    let projects = ctx
        .board()
        .projects()
        .await
        .context("failed to list projects")?;
    output::print_projects(&projects, ctx.flags.format)
}
