use anyhow::Context;
use campus_core::responses::ProgramSummary;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProgramCommands;
use crate::commands::shared::limit::{effective_limit, take};
use crate::context::AppContext;
use crate::output::{notice, output};
use crate::progress::loading;

#[derive(Debug, Serialize)]
struct ProgramListResponse {
    programs: Vec<ProgramSummary>,
}

/// Handle `campus program`.
pub async fn handle(
    action: &ProgramCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ProgramCommands::List { search, limit } => {
            list(search.as_deref(), *limit, ctx, flags).await
        }
        ProgramCommands::Show { slug } => show(slug, ctx, flags).await,
    }
}

async fn list(
    search: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let limit = effective_limit(limit, flags.limit, ctx.config.general.default_limit);
    let programs = loading("Loading programs", ctx.platform.programs(search.unwrap_or_default()))
        .await
        .context("failed to load programs")?;
    output(
        &ProgramListResponse {
            programs: take(programs, limit),
        },
        flags.format,
    )
}

async fn show(slug: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let detail = loading(
        "Loading program",
        ctx.platform.program_detail(slug, ctx.current_user.as_ref()),
    )
    .await
    .with_context(|| format!("failed to load program '{slug}'"))?;

    if detail.waitlist_hint.is_some() {
        notice(
            &format!("Join the waitlist: campus waitlist join --email <email> --program {slug}"),
            flags,
        );
    }
    output(&detail, flags.format)
}
