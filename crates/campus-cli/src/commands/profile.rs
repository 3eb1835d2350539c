use anyhow::Context;
use campus_core::enums::UserRole;
use campus_core::updates::{UserUpdate, UserUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ProfileCommands;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::loading;

/// Handle `campus profile`.
pub async fn handle(
    action: &ProfileCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let user = ctx.require_user()?;
    match action {
        ProfileCommands::Show => {
            let profile = loading("Loading profile", ctx.platform.profile(user))
                .await
                .context("failed to load profile")?;
            output(&profile, flags.format)
        }
        ProfileCommands::Update {
            email,
            role,
            master_cohort,
        } => {
            let update = build_update(email.as_deref(), role.as_deref(), master_cohort.as_deref())?;
            let updated = ctx
                .platform
                .update_profile(user, &update)
                .await
                .context("failed to update profile")?;
            output(&updated, flags.format)
        }
    }
}

fn build_update(
    email: Option<&str>,
    role: Option<&str>,
    master_cohort: Option<&str>,
) -> anyhow::Result<UserUpdate> {
    let mut builder = UserUpdateBuilder::new();
    if let Some(email) = email {
        builder = builder.email(email.trim());
    }
    if let Some(role) = role {
        builder = builder.role(parse_enum::<UserRole>(role, "role")?);
    }
    if let Some(cohort) = master_cohort {
        builder = builder.master_cohort(cohort.trim());
    }
    let update = builder.build();
    if update.is_empty() {
        anyhow::bail!("nothing to update: pass --email, --role, or --master-cohort");
    }
    Ok(update)
}
