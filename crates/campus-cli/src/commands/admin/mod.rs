mod lectures;
mod programs;
mod stats;
mod users;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminCommands;
use crate::context::AppContext;

/// Handle `campus admin`. Every subcommand requires an admin session.
pub async fn handle(
    action: &AdminCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let admin = ctx.require_admin()?;
    tracing::debug!(admin = admin.id, "admin command");
    match action {
        AdminCommands::Stats => stats::run(ctx, flags).await,
        AdminCommands::Users { action } => users::handle(action, ctx, flags).await,
        AdminCommands::Programs { action } => programs::handle(action, ctx, flags).await,
        AdminCommands::Lectures { action } => lectures::handle(action, ctx, flags).await,
    }
}

#[cfg(test)]
mod tests {
    use super::handle;
    use crate::cli::subcommands::AdminCommands;
    use crate::commands::shared::testing::{ctx, flags};

    #[tokio::test]
    async fn non_admins_are_turned_away() {
        let (ctx, _tmp) = ctx(Some(2)).await;
        let err = handle(&AdminCommands::Stats, &ctx, &flags())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("Admin access required"));
    }

    #[tokio::test]
    async fn admin_sees_stats() {
        let (ctx, _tmp) = ctx(Some(1)).await;
        handle(&AdminCommands::Stats, &ctx, &flags())
            .await
            .expect("stats load");
    }
}
