use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::loading;

/// Handle `campus home`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let home = loading("Loading home page", ctx.platform.home())
        .await
        .context("failed to load home page")?;
    output(&home, flags.format)
}
