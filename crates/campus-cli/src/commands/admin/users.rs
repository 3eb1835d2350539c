use anyhow::Context;
use campus_core::entities::User;
use campus_core::responses::DeleteResponse;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminUserCommands;
use crate::commands::shared::confirm::require_confirmation;
use crate::commands::shared::limit::{effective_limit, take};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct UserListResponse {
    total: usize,
    users: Vec<User>,
}

pub async fn handle(
    action: &AdminUserCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let users = &ctx.platform.users;
    match action {
        AdminUserCommands::List { search, limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let matched = match search.as_deref() {
                Some(term) => users.search(term).await,
                None => users.all().await,
            };
            output(
                &UserListResponse {
                    total: matched.len(),
                    users: take(matched, limit),
                },
                flags.format,
            )
        }
        AdminUserCommands::ToggleAdmin { id } => {
            let user = users
                .toggle_admin(*id)
                .await
                .with_context(|| format!("failed to update admin rights of user {id}"))?;
            tracing::info!(user = user.id, is_admin = user.is_admin, "admin rights changed");
            output(&user, flags.format)
        }
        AdminUserCommands::Delete { id, yes } => {
            require_confirmation(*yes, &format!("user {id}"))?;
            users
                .delete(*id)
                .await
                .with_context(|| format!("failed to delete user {id}"))?;
            output(
                &DeleteResponse {
                    entity: String::from("user"),
                    id: *id,
                    deleted: true,
                },
                flags.format,
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::handle;
    use crate::cli::subcommands::AdminUserCommands;
    use crate::commands::shared::testing::{ctx, flags};

    #[tokio::test]
    async fn last_admin_cannot_be_deleted() {
        let (ctx, _tmp) = ctx(Some(1)).await;
        let action = AdminUserCommands::Delete { id: 1, yes: true };
        let err = handle(&action, &ctx, &flags()).await.unwrap_err();
        assert!(format!("{err:#}").contains("Cannot delete the last admin user"));
        assert_eq!(ctx.platform.users.count().await, 5);
    }

    #[tokio::test]
    async fn delete_needs_confirmation() {
        let (ctx, _tmp) = ctx(Some(1)).await;
        let action = AdminUserCommands::Delete { id: 5, yes: false };
        assert!(handle(&action, &ctx, &flags()).await.is_err());
        assert_eq!(ctx.platform.users.count().await, 5);

        let action = AdminUserCommands::Delete { id: 5, yes: true };
        handle(&action, &ctx, &flags()).await.expect("confirmed delete");
        assert_eq!(ctx.platform.users.count().await, 4);
    }

    #[tokio::test]
    async fn toggle_admin_promotes_user() {
        let (ctx, _tmp) = ctx(Some(1)).await;
        handle(&AdminUserCommands::ToggleAdmin { id: 3 }, &ctx, &flags())
            .await
            .expect("toggle succeeds");
        assert!(ctx.platform.users.get(3).await.unwrap().is_admin);
    }
}
