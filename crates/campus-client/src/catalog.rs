//! Program and lecture catalog: REST or in-memory.
//!
//! [`Catalog`] is the only data source with two backends. Commands call the
//! same methods either way; the backend is picked from `api.backend`.

use std::collections::BTreeMap;
use std::time::Duration;

use campus_core::entities::{Lecture, NewLecture, NewProgram, Program};
use campus_core::ordering;
use campus_core::responses::LectureProgress;
use campus_core::stats::{LevelCounts, ProgramCounts};
use campus_core::updates::{LectureUpdate, ProgramUpdate};
use campus_core::validate;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::error::ClientError;
use crate::rest::RestCatalog;
use crate::seed;
use crate::table::MemoryTable;

/// Seeded in-memory catalog.
pub struct MemoryCatalog {
    programs: MemoryTable<Program>,
    lectures: MemoryTable<Lecture>,
    completions: RwLock<BTreeMap<u64, DateTime<Utc>>>,
}

impl MemoryCatalog {
    /// Catalog holding the seed programs and lectures.
    #[must_use]
    pub fn seeded(latency: Duration) -> Self {
        Self::with_rows(seed::programs(), seed::lectures(), latency)
    }

    #[must_use]
    pub fn with_rows(programs: Vec<Program>, lectures: Vec<Lecture>, latency: Duration) -> Self {
        Self {
            programs: MemoryTable::new(programs, latency),
            lectures: MemoryTable::new(lectures, latency),
            completions: RwLock::new(BTreeMap::new()),
        }
    }

    async fn program_by_slug(&self, slug: &str) -> Result<Program, ClientError> {
        self.programs
            .find(|p| p.slug == slug)
            .await
            .ok_or_else(|| ClientError::not_found("program", slug))
    }

    async fn create_program(&self, new: NewProgram) -> Result<Program, ClientError> {
        self.programs
            .transact(|rows| {
                let taken = rows.iter().map(|p| p.slug.as_str());
                validate::unique_slug("program", &new.slug, taken)?;
                let program = new.into_program(crate::table::next_id(rows), Utc::now());
                rows.push(program.clone());
                Ok(program)
            })
            .await
    }

    async fn update_program(
        &self,
        id: u64,
        update: &ProgramUpdate,
    ) -> Result<Program, ClientError> {
        self.programs
            .transact(|rows| {
                if let Some(slug) = &update.slug {
                    let others = rows.iter().filter(|p| p.id != id);
                    validate::unique_slug("program", slug, others.map(|p| p.slug.as_str()))?;
                }
                let program = rows
                    .iter_mut()
                    .find(|p| p.id == id)
                    .ok_or_else(|| ClientError::not_found("program", id))?;
                update.apply(program);
                Ok(program.clone())
            })
            .await
    }

    async fn complete(&self, id: u64) -> Result<LectureProgress, ClientError> {
        self.lectures.get(id).await?;
        let mut completions = self.completions.write().await;
        let completed_at = *completions.entry(id).or_insert_with(Utc::now);
        Ok(LectureProgress {
            lecture_id: id,
            completed: true,
            completed_at: Some(completed_at),
        })
    }

    async fn progress(&self, id: u64) -> Result<LectureProgress, ClientError> {
        self.lectures.get(id).await?;
        let completed_at = self.completions.read().await.get(&id).copied();
        Ok(LectureProgress {
            lecture_id: id,
            completed: completed_at.is_some(),
            completed_at,
        })
    }
}

/// Program and lecture data source.
pub enum Catalog {
    Rest(RestCatalog),
    Memory(MemoryCatalog),
}

impl Catalog {
    #[must_use]
    pub const fn backend_name(&self) -> &'static str {
        match self {
            Self::Rest(_) => "rest",
            Self::Memory(_) => "mock",
        }
    }

    // ── Programs ───────────────────────────────────────────────────

    pub async fn programs(&self) -> Result<Vec<Program>, ClientError> {
        match self {
            Self::Rest(rest) => rest.programs().await,
            Self::Memory(mem) => Ok(mem.programs.all().await),
        }
    }

    pub async fn program(&self, id: u64) -> Result<Program, ClientError> {
        match self {
            Self::Rest(rest) => rest.program(id).await,
            Self::Memory(mem) => mem.programs.get(id).await,
        }
    }

    pub async fn program_by_slug(&self, slug: &str) -> Result<Program, ClientError> {
        match self {
            Self::Rest(rest) => rest.program_by_slug(slug).await,
            Self::Memory(mem) => mem.program_by_slug(slug).await,
        }
    }

    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] for a malformed slug or empty title,
    /// and [`ClientError::Rejected`] for a duplicate slug on the in-memory backend.
    pub async fn create_program(&self, new: NewProgram) -> Result<Program, ClientError> {
        validate::new_program(&new)?;
        match self {
            Self::Rest(rest) => rest.create_program(&new).await,
            Self::Memory(mem) => mem.create_program(new).await,
        }
    }

    pub async fn update_program(
        &self,
        id: u64,
        update: &ProgramUpdate,
    ) -> Result<Program, ClientError> {
        if let Some(slug) = &update.slug {
            validate::slug(slug)?;
        }
        if let Some(title) = &update.title {
            validate::required("title", title)?;
        }
        match self {
            Self::Rest(rest) => rest.update_program(id, update).await,
            Self::Memory(mem) => mem.update_program(id, update).await,
        }
    }

    pub async fn program_stats(&self) -> Result<ProgramCounts, ClientError> {
        match self {
            Self::Rest(rest) => rest.program_stats().await,
            Self::Memory(mem) => Ok(ProgramCounts::of(&mem.programs.all().await)),
        }
    }

    /// Lectures of the deleted program stay in place.
    pub async fn delete_program(&self, id: u64) -> Result<(), ClientError> {
        match self {
            Self::Rest(rest) => rest.delete_program(id).await,
            Self::Memory(mem) => mem.programs.remove(id).await.map(|_| ()),
        }
    }

    // ── Lectures ───────────────────────────────────────────────────

    pub async fn lectures(&self) -> Result<Vec<Lecture>, ClientError> {
        match self {
            Self::Rest(rest) => rest.lectures().await,
            Self::Memory(mem) => Ok(mem.lectures.all().await),
        }
    }

    pub async fn lecture(&self, id: u64) -> Result<Lecture, ClientError> {
        match self {
            Self::Rest(rest) => rest.lecture(id).await,
            Self::Memory(mem) => mem.lectures.get(id).await,
        }
    }

    /// Lectures of one program, sorted by `order`.
    pub async fn program_lectures(&self, program_id: u64) -> Result<Vec<Lecture>, ClientError> {
        let mut lectures = match self {
            Self::Rest(rest) => rest.program_lectures(program_id).await?,
            Self::Memory(mem) => mem.lectures.filter(|l| l.program_id == program_id).await,
        };
        ordering::sort_by_order(&mut lectures);
        Ok(lectures)
    }

    /// Lectures of the program with `slug`, sorted by `order`.
    pub async fn program_lectures_by_slug(&self, slug: &str) -> Result<Vec<Lecture>, ClientError> {
        let mut lectures = match self {
            Self::Rest(rest) => rest.program_lectures_by_slug(slug).await?,
            Self::Memory(mem) => {
                let program = mem.program_by_slug(slug).await?;
                mem.lectures.filter(|l| l.program_id == program.id).await
            }
        };
        ordering::sort_by_order(&mut lectures);
        Ok(lectures)
    }

    pub async fn create_lecture(&self, new: NewLecture) -> Result<Lecture, ClientError> {
        validate::new_lecture(&new)?;
        match self {
            Self::Rest(rest) => rest.create_lecture(&new).await,
            Self::Memory(mem) => Ok(mem
                .lectures
                .insert(|id| new.into_lecture(id, Utc::now()))
                .await),
        }
    }

    pub async fn update_lecture(
        &self,
        id: u64,
        update: &LectureUpdate,
    ) -> Result<Lecture, ClientError> {
        if let Some(title) = &update.title {
            validate::required("title", title)?;
        }
        match self {
            Self::Rest(rest) => rest.update_lecture(id, update).await,
            Self::Memory(mem) => mem.lectures.update(id, |l| update.apply(l)).await,
        }
    }

    pub async fn delete_lecture(&self, id: u64) -> Result<(), ClientError> {
        match self {
            Self::Rest(rest) => rest.delete_lecture(id).await,
            Self::Memory(mem) => mem.lectures.remove(id).await.map(|_| ()),
        }
    }

    pub async fn lecture_stats(&self) -> Result<LevelCounts, ClientError> {
        match self {
            Self::Rest(rest) => rest.lecture_stats().await,
            Self::Memory(mem) => Ok(LevelCounts::of(&mem.lectures.all().await)),
        }
    }

    pub async fn complete_lecture(&self, id: u64) -> Result<LectureProgress, ClientError> {
        match self {
            Self::Rest(rest) => rest.complete_lecture(id).await,
            Self::Memory(mem) => mem.complete(id).await,
        }
    }

    pub async fn lecture_progress(&self, id: u64) -> Result<LectureProgress, ClientError> {
        match self {
            Self::Rest(rest) => rest.lecture_progress(id).await,
            Self::Memory(mem) => mem.progress(id).await,
        }
    }
}
