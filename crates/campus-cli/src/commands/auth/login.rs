use anyhow::Context;
use campus_core::responses::SessionResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthLoginArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &AuthLoginArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    if args.password.is_some() {
        tracing::debug!("password supplied; accounts are matched by email only");
    }
    let user = ctx
        .platform
        .login(args.email.trim())
        .await
        .context("login failed")?;
    tracing::debug!(user = user.id, "logged in");

    output(
        &SessionResponse {
            logged_in: true,
            user: Some(user),
        },
        flags.format,
    )
}
