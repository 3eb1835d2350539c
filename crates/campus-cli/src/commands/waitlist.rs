use anyhow::Context;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::WaitlistCommands;
use crate::context::AppContext;
use crate::output::{notice, output};

/// Handle `campus waitlist`.
pub async fn handle(
    action: &WaitlistCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        WaitlistCommands::Join { email, program } => {
            let entry = ctx
                .platform
                .join_waitlist(email.trim(), program)
                .await
                .context("failed to join waitlist")?;
            notice(
                "You're on the waitlist! We'll notify you when the program opens.",
                flags,
            );
            output(&entry, flags.format)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::handle;
    use crate::cli::subcommands::WaitlistCommands;
    use crate::commands::shared::testing::{ctx, flags};

    fn join(email: &str) -> WaitlistCommands {
        WaitlistCommands::Join {
            email: email.to_string(),
            program: String::from("text-influencer"),
        }
    }

    #[tokio::test]
    async fn second_join_is_rejected() {
        let (ctx, _tmp) = ctx(None).await;
        handle(&join("new@example.com"), &ctx, &flags())
            .await
            .expect("first join succeeds");
        let err = handle(&join("new@example.com"), &ctx, &flags())
            .await
            .unwrap_err();
        assert!(format!("{err:#}").contains("already on the waitlist"));
    }

    #[tokio::test]
    async fn malformed_email_is_rejected() {
        let (ctx, _tmp) = ctx(None).await;
        assert!(handle(&join("not-an-email"), &ctx, &flags()).await.is_err());
    }
}
