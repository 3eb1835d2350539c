use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LectureCommands;
use crate::context::AppContext;
use crate::output::{notice, output};
use crate::progress::loading;

/// Handle `campus lecture`.
pub async fn handle(
    action: &LectureCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        LectureCommands::Show { id } => show(*id, ctx, flags).await,
        LectureCommands::Complete { id } => complete(*id, ctx, flags).await,
        LectureCommands::Progress { id } => progress(*id, ctx, flags).await,
    }
}

async fn show(id: u64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let page = loading("Loading lecture", ctx.platform.lecture(id, ctx.current_user.as_ref()))
        .await
        .with_context(|| format!("failed to load lecture {id}"))?;
    if let Some(reason) = &page.denial {
        notice(reason, flags);
    }
    output(&page, flags.format)
}

/// Only lectures the user can open may be completed.
async fn complete(id: u64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let user = ctx.require_user()?;
    let page = ctx
        .platform
        .lecture(id, Some(user))
        .await
        .with_context(|| format!("failed to load lecture {id}"))?;
    if let Some(reason) = page.denial {
        anyhow::bail!(reason);
    }
    let progress = ctx
        .platform
        .catalog
        .complete_lecture(id)
        .await
        .with_context(|| format!("failed to mark lecture {id} complete"))?;
    tracing::debug!(lecture = id, user = user.id, "lecture completed");
    output(&progress, flags.format)
}

async fn progress(id: u64, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let progress = ctx
        .platform
        .catalog
        .lecture_progress(id)
        .await
        .with_context(|| format!("failed to load progress for lecture {id}"))?;
    output(&progress, flags.format)
}

#[cfg(test)]
mod tests {
    use super::{complete, show};
    use crate::commands::shared::testing::{ctx, flags};

    #[tokio::test]
    async fn locked_lecture_still_renders() {
        let (ctx, _tmp) = ctx(None).await;
        show(7, &ctx, &flags()).await.expect("locked page renders");
    }

    #[tokio::test]
    async fn complete_requires_login() {
        let (ctx, _tmp) = ctx(None).await;
        let err = complete(1, &ctx, &flags()).await.unwrap_err();
        assert!(err.to_string().contains("log in first"));
    }

    #[tokio::test]
    async fn student_cannot_complete_master_lecture() {
        let (ctx, _tmp) = ctx(Some(3)).await;
        let err = complete(7, &ctx, &flags()).await.unwrap_err();
        assert_eq!(err.to_string(), "This lecture requires master level access.");
    }

    #[tokio::test]
    async fn completion_is_recorded() {
        let (ctx, _tmp) = ctx(Some(3)).await;
        complete(2, &ctx, &flags()).await.expect("member lecture completes");
        let progress = ctx.platform.catalog.lecture_progress(2).await.unwrap();
        assert!(progress.completed);
        assert!(progress.completed_at.is_some());
    }
}
