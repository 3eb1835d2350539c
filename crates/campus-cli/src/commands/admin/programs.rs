use anyhow::Context;
use campus_core::entities::{NewProgram, Program};
use campus_core::ordering;
use campus_core::responses::DeleteResponse;
use campus_core::search;
use campus_core::updates::ProgramUpdateBuilder;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AdminProgramCommands;
use crate::commands::shared::confirm::require_confirmation;
use crate::commands::shared::limit::{effective_limit, take};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ProgramTableResponse {
    total: usize,
    programs: Vec<Program>,
}

pub async fn handle(
    action: &AdminProgramCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let catalog = &ctx.platform.catalog;
    match action {
        AdminProgramCommands::List { search, limit } => {
            let limit = effective_limit(*limit, flags.limit, ctx.config.general.default_limit);
            let mut programs = catalog.programs().await.context("failed to load programs")?;
            if let Some(term) = search.as_deref() {
                programs.retain(|program| search::admin_program_matches(program, term));
            }
            ordering::sort_programs(&mut programs);
            output(
                &ProgramTableResponse {
                    total: programs.len(),
                    programs: take(programs, limit),
                },
                flags.format,
            )
        }
        AdminProgramCommands::Create {
            slug,
            title,
            description,
            common_course,
        } => {
            let program = catalog
                .create_program(NewProgram {
                    slug: slug.trim().to_string(),
                    title: title.trim().to_string(),
                    description: description.trim().to_string(),
                    has_common_course: *common_course,
                })
                .await
                .context("failed to create program")?;
            tracing::info!(program = program.id, slug = %program.slug, "program created");
            output(&program, flags.format)
        }
        AdminProgramCommands::Update {
            id,
            slug,
            title,
            description,
            common_course,
        } => {
            let mut builder = ProgramUpdateBuilder::new();
            if let Some(slug) = slug {
                builder = builder.slug(slug.trim());
            }
            if let Some(title) = title {
                builder = builder.title(title.trim());
            }
            if let Some(description) = description {
                builder = builder.description(description.trim());
            }
            if let Some(common) = common_course {
                builder = builder.has_common_course(*common);
            }
            let update = builder.build();
            if update.is_empty() {
                anyhow::bail!("nothing to update for program {id}");
            }
            let program = catalog
                .update_program(*id, &update)
                .await
                .with_context(|| format!("failed to update program {id}"))?;
            output(&program, flags.format)
        }
        AdminProgramCommands::Delete { id, yes } => {
            require_confirmation(*yes, &format!("program {id}"))?;
            catalog
                .delete_program(*id)
                .await
                .with_context(|| format!("failed to delete program {id}"))?;
            output(
                &DeleteResponse {
                    entity: String::from("program"),
                    id: *id,
                    deleted: true,
                },
                flags.format,
            )
        }
    }
}
