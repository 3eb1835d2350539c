//! Counts shown on the admin dashboard, admin tables, and the profile page.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::access::{MASTER_PROGRAM_SLUG, MEMBERSHIP_SLUG};
use crate::entities::{Lecture, Program, Review, User};
use crate::enums::{LectureLevel, UserRole};

/// Record counts for the admin dashboard.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DashboardStats {
    pub users: usize,
    pub programs: usize,
    pub lectures: usize,
    pub posts: usize,
    pub reviews: usize,
    pub waitlist: usize,
}

impl DashboardStats {
    /// Lectures plus posts, shown as "content items".
    #[must_use]
    pub const fn content_items(&self) -> usize {
        self.lectures + self.posts
    }
}

/// Lectures per access tier.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LevelCounts {
    pub total: usize,
    pub member: usize,
    pub master: usize,
    pub master_common: usize,
}

impl LevelCounts {
    #[must_use]
    pub fn of(lectures: &[Lecture]) -> Self {
        lectures.iter().fold(
            Self {
                total: lectures.len(),
                ..Self::default()
            },
            |mut counts, lecture| {
                match lecture.level {
                    LectureLevel::Member => counts.member += 1,
                    LectureLevel::Master => counts.master += 1,
                    LectureLevel::MasterCommon => counts.master_common += 1,
                }
                counts
            },
        )
    }
}

/// Program table summary.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProgramCounts {
    pub total: usize,
    pub membership: usize,
    pub master: usize,
    pub with_common_course: usize,
}

impl ProgramCounts {
    #[must_use]
    pub fn of(programs: &[Program]) -> Self {
        Self {
            total: programs.len(),
            membership: programs.iter().filter(|p| p.slug == MEMBERSHIP_SLUG).count(),
            master: programs
                .iter()
                .filter(|p| p.slug == MASTER_PROGRAM_SLUG)
                .count(),
            with_common_course: programs.iter().filter(|p| p.has_common_course).count(),
        }
    }
}

/// User table summary.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct UserCounts {
    pub total: usize,
    pub admins: usize,
    pub students: usize,
    pub masters: usize,
}

impl UserCounts {
    #[must_use]
    pub fn of(users: &[User]) -> Self {
        Self {
            total: users.len(),
            admins: users.iter().filter(|u| u.is_admin).count(),
            students: users.iter().filter(|u| u.role == UserRole::Student).count(),
            masters: users.iter().filter(|u| u.role == UserRole::Master).count(),
        }
    }
}

/// Activity figures on the profile page.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProfileStats {
    pub reviews_written: usize,
    pub programs_available: usize,
    pub lectures_available: usize,
}

impl ProfileStats {
    #[must_use]
    pub fn of(user: &User, programs: &[Program], lectures: &[Lecture], reviews: &[Review]) -> Self {
        Self {
            reviews_written: reviews.iter().filter(|r| r.author_id == user.id).count(),
            programs_available: programs.len(),
            lectures_available: lectures.len(),
        }
    }
}

/// Number of lectures per program id. Programs without lectures map to 0.
#[must_use]
pub fn lecture_counts(programs: &[Program], lectures: &[Lecture]) -> BTreeMap<u64, usize> {
    let mut counts: BTreeMap<u64, usize> = programs.iter().map(|p| (p.id, 0)).collect();
    for lecture in lectures {
        *counts.entry(lecture.program_id).or_default() += 1;
    }
    counts
}
