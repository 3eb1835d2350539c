use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::loading;

pub async fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let stats = loading("Loading dashboard", ctx.platform.admin_stats())
        .await
        .context("failed to load dashboard stats")?;
    output(&stats, flags.format)
}
