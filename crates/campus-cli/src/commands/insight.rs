use anyhow::Context;
use campus_core::responses::PostSummary;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::InsightCommands;
use crate::commands::shared::limit::{effective_limit, take};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct InsightListResponse {
    insights: Vec<PostSummary>,
}

/// Handle `campus insight`.
pub async fn handle(
    action: &InsightCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        InsightCommands::List { search, limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let spinner = Progress::spinner("Loading insights");
            let insights = ctx.platform.insights(search.as_deref().unwrap_or_default()).await;
            spinner.finish_clear();
            output(
                &InsightListResponse {
                    insights: take(insights, limit),
                },
                flags.format,
            )
        }
        InsightCommands::Show { slug } => {
            let insight = ctx
                .platform
                .insight(slug)
                .await
                .with_context(|| format!("failed to load insight '{slug}'"))?;
            output(&insight, flags.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::handle;
    use crate::cli::subcommands::InsightCommands;
    use crate::commands::shared::testing::{ctx, flags};

    #[tokio::test]
    async fn draft_posts_are_not_found_by_slug() {
        let (ctx, _tmp) = ctx(None).await;
        let drafts: Vec<_> = ctx
            .platform
            .posts
            .all()
            .await
            .into_iter()
            .filter(|post| !post.is_published())
            .collect();
        assert!(!drafts.is_empty());

        let action = InsightCommands::Show {
            slug: drafts[0].slug.clone(),
        };
        let err = handle(&action, &ctx, &flags()).await.unwrap_err();
        assert!(err.to_string().starts_with("failed to load insight"));
    }

    #[tokio::test]
    async fn list_accepts_search() {
        let (ctx, _tmp) = ctx(None).await;
        let action = InsightCommands::List {
            search: Some(String::from("writing")),
            limit: Some(1),
        };
        handle(&action, &ctx, &flags()).await.expect("list should load");
    }
}
