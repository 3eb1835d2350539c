use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthLogoutResponse {
    cleared: bool,
    was_logged_in: bool,
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.platform.logout()?;
    output(
        &AuthLogoutResponse {
            cleared: true,
            was_logged_in: ctx.current_user.is_some(),
        },
        flags.format,
    )
}
