use anyhow::Context;
use campus_core::entities::{Lecture, NewLecture};
use campus_core::enums::LectureLevel;
use campus_core::ordering;
use campus_core::responses::DeleteResponse;
use campus_core::search;
use campus_core::updates::LectureUpdateBuilder;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminLectureCommands;
use crate::commands::shared::confirm::require_confirmation;
use crate::commands::shared::limit::{effective_limit, take};
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct LectureTableResponse {
    total: usize,
    lectures: Vec<Lecture>,
}

pub async fn handle(
    action: &AdminLectureCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let catalog = &ctx.platform.catalog;
    match action {
        AdminLectureCommands::List {
            search,
            program,
            limit,
        } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let mut lectures = catalog.lectures().await.context("failed to load lectures")?;
            if let Some(program_id) = program {
                lectures.retain(|lecture| lecture.program_id == *program_id);
            }
            if let Some(term) = search.as_deref() {
                lectures.retain(|lecture| search::lecture_matches(lecture, term));
            }
            ordering::sort_admin_lectures(&mut lectures);
            output(
                &LectureTableResponse {
                    total: lectures.len(),
                    lectures: take(lectures, limit),
                },
                flags.format,
            )
        }
        AdminLectureCommands::Create {
            program,
            title,
            content,
            category,
            level,
            order,
        } => {
            let level = parse_enum::<LectureLevel>(level, "level")?;
            catalog
                .program(*program)
                .await
                .with_context(|| format!("cannot add a lecture to program {program}"))?;
            let lecture = catalog
                .create_lecture(NewLecture {
                    program_id: *program,
                    title: title.trim().to_string(),
                    content: content.clone(),
                    category: category.trim().to_string(),
                    level,
                    order: *order,
                })
                .await
                .context("failed to create lecture")?;
            tracing::info!(lecture = lecture.id, program = lecture.program_id, "lecture created");
            output(&lecture, flags.format)
        }
        AdminLectureCommands::Update {
            id,
            program,
            title,
            content,
            category,
            level,
            order,
        } => {
            let mut builder = LectureUpdateBuilder::new();
            if let Some(program) = program {
                catalog
                    .program(*program)
                    .await
                    .with_context(|| format!("cannot move lecture {id} to program {program}"))?;
                builder = builder.program_id(*program);
            }
            if let Some(title) = title {
                builder = builder.title(title.trim());
            }
            if let Some(content) = content {
                builder = builder.content(content.as_str());
            }
            if let Some(category) = category {
                builder = builder.category(category.trim());
            }
            if let Some(level) = level {
                builder = builder.level(parse_enum::<LectureLevel>(level, "level")?);
            }
            if let Some(order) = order {
                builder = builder.order(*order);
            }
            let update = builder.build();
            if update.is_empty() {
                anyhow::bail!("nothing to update for lecture {id}");
            }
            let lecture = catalog
                .update_lecture(*id, &update)
                .await
                .with_context(|| format!("failed to update lecture {id}"))?;
            output(&lecture, flags.format)
        }
        AdminLectureCommands::Delete { id, yes } => {
            require_confirmation(*yes, &format!("lecture {id}"))?;
            catalog
                .delete_lecture(*id)
                .await
                .with_context(|| format!("failed to delete lecture {id}"))?;
            output(
                &DeleteResponse {
                    entity: String::from("lecture"),
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
    use campus_core::enums::LectureLevel;

    use super::handle;
    use crate::cli::subcommands::AdminLectureCommands;
    use crate::commands::shared::testing::{ctx, flags};

    fn create(program: u64, level: &str) -> AdminLectureCommands {
        AdminLectureCommands::Create {
            program,
            title: String::from("Writing hooks"),
            content: String::from("Open with tension."),
            category: String::from("Craft"),
            level: level.to_string(),
            order: 7,
        }
    }

    #[tokio::test]
    async fn created_lecture_joins_program_listing() {
        let (ctx, _tmp) = ctx(Some(1)).await;
        handle(&create(2, "master-common"), &ctx, &flags())
            .await
            .expect("create succeeds");
        let lectures = ctx.platform.catalog.program_lectures(2).await.unwrap();
        let created = lectures
            .iter()
            .find(|l| l.title == "Writing hooks")
            .expect("lecture listed");
        assert_eq!(created.level, LectureLevel::MasterCommon);
        assert_eq!(created.category, "Craft");
    }

    #[tokio::test]
    async fn unknown_program_or_level_is_rejected() {
        let (ctx, _tmp) = ctx(Some(1)).await;
        assert!(handle(&create(99, "member"), &ctx, &flags()).await.is_err());
        assert!(handle(&create(1, "vip"), &ctx, &flags()).await.is_err());
        assert_eq!(ctx.platform.catalog.lectures().await.unwrap().len(), 10);
    }

    #[tokio::test]
    async fn update_changes_level() {
        let (ctx, _tmp) = ctx(Some(1)).await;
        let action = AdminLectureCommands::Update {
            id: 7,
            program: None,
            title: None,
            content: None,
            category: None,
            level: Some(String::from("master_common")),
            order: None,
        };
        handle(&action, &ctx, &flags()).await.expect("update succeeds");
        let lecture = ctx.platform.catalog.lecture(7).await.unwrap();
        assert_eq!(lecture.level, LectureLevel::MasterCommon);
    }

    #[tokio::test]
    async fn delete_removes_lecture() {
        let (ctx, _tmp) = ctx(Some(1)).await;
        let action = AdminLectureCommands::Delete { id: 10, yes: true };
        handle(&action, &ctx, &flags()).await.expect("delete succeeds");
        assert!(ctx.platform.catalog.lecture(10).await.is_err());
    }
}
