use anyhow::Context;
use campus_core::responses::SessionResponse;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuthSignupArgs;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle(
    args: &AuthSignupArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = ctx
        .platform
        .signup(args.email.trim(), &args.password, &args.confirm_password)
        .await
        .context("signup failed")?;
    tracing::debug!(user = user.id, "account created");

    output(
        &SessionResponse {
            logged_in: true,
            user: Some(user),
        },
        flags.format,
    )
}
