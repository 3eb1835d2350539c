use campus_core::entities::User;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

#[derive(Serialize)]
struct AuthStatusResponse {
    logged_in: bool,
    user: Option<User>,
    backend: &'static str,
    session_path: Option<String>,
}

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(
        &AuthStatusResponse {
            logged_in: ctx.current_user.is_some(),
            user: ctx.current_user.clone(),
            backend: ctx.platform.catalog.backend_name(),
            session_path: ctx.session_path(),
        },
        flags.format,
    )
}
