use anyhow::Context;
use campus_core::responses::ReviewEntry;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ReviewCommands;
use crate::commands::shared::limit::{effective_limit, take};
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct ReviewListResponse {
    reviews: Vec<ReviewEntry>,
}

/// Handle `campus review`.
pub async fn handle(
    action: &ReviewCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ReviewCommands::List { limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let spinner = Progress::spinner("Loading reviews");
            let reviews = ctx.platform.reviews(ctx.current_user.as_ref()).await;
            spinner.finish_clear();
            output(
                &ReviewListResponse {
                    reviews: take(reviews, limit),
                },
                flags.format,
            )
        }
        ReviewCommands::Create { text } => {
            let user = ctx.require_user()?;
            let entry = ctx
                .platform
                .create_review(user, text)
                .await
                .context("failed to submit review")?;
            output(&entry, flags.format)
        }
        ReviewCommands::Like { id } => {
            let user = ctx.require_user()?;
            let like = ctx
                .platform
                .like_review(user, *id)
                .await
                .with_context(|| format!("failed to update like on review {id}"))?;
            output(&like, flags.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::handle;
    use crate::cli::subcommands::ReviewCommands;
    use crate::commands::shared::testing::{ctx, flags};

    #[tokio::test]
    async fn anonymous_visitor_cannot_like() {
        let (ctx, _tmp) = ctx(None).await;
        let err = handle(&ReviewCommands::Like { id: 1 }, &ctx, &flags())
            .await
            .unwrap_err();
        assert!(err.to_string().contains("log in first"));
    }

    #[tokio::test]
    async fn blank_review_is_rejected() {
        let (ctx, _tmp) = ctx(Some(4)).await;
        let action = ReviewCommands::Create {
            text: String::from("   "),
        };
        assert!(handle(&action, &ctx, &flags()).await.is_err());
        assert_eq!(ctx.platform.reviews.count().await, 5);
    }

    #[tokio::test]
    async fn review_is_added_for_current_user() {
        let (ctx, _tmp) = ctx(Some(4)).await;
        let action = ReviewCommands::Create {
            text: String::from("Loved the writing drills"),
        };
        handle(&action, &ctx, &flags()).await.expect("review created");
        let mine = ctx.platform.reviews.by_author(4).await;
        assert!(mine.iter().any(|r| r.text == "Loved the writing drills"));
    }
}
