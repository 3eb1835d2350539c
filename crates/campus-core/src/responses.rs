//! View structs returned as JSON by `campus` commands.
//!
//! Each struct is the fully derived shape of one page: entities plus the
//! counts, access annotations, and author lookups the page displays.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::access::{CategoryGroup, LectureNavigation, MEMBERSHIP_SLUG};
use crate::entities::{Lecture, Post, Program, Review, User};
use crate::stats::{DashboardStats, LevelCounts, ProfileStats, ProgramCounts, UserCounts};

/// Label for a program's course type.
#[must_use]
pub fn program_kind(program: &Program) -> &'static str {
    if program.slug == MEMBERSHIP_SLUG {
        "Member Course"
    } else {
        "Master Course"
    }
}

/// A program card: the program plus its lecture count.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProgramSummary {
    pub program: Program,
    pub kind: String,
    pub lecture_count: usize,
}

/// A post card with its author's email resolved.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct PostSummary {
    pub post: Post,
    pub author: Option<String>,
}

/// Response from `campus home`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct HomeResponse {
    pub featured_programs: Vec<ProgramSummary>,
    pub recent_posts: Vec<PostSummary>,
}

/// Response from `campus program show`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProgramDetailResponse {
    pub program: Program,
    pub kind: String,
    pub lecture_count: usize,
    pub categories: Vec<CategoryGroup>,
    /// Shown when the program has no lectures yet.
    pub waitlist_hint: Option<String>,
}

/// Response from `campus lecture show`.
///
/// `lecture.content` is blanked when the viewer may not open it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LectureResponse {
    pub lecture: Lecture,
    pub program: Option<Program>,
    pub accessible: bool,
    pub denial: Option<String>,
    pub navigation: LectureNavigation,
}

/// Completion state of a lecture, returned by `lecture complete` and `lecture progress`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LectureProgress {
    pub lecture_id: u64,
    pub completed: bool,
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
}

/// Response from `campus insight show`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct InsightResponse {
    pub post: Post,
    pub author: Option<User>,
    pub related: Vec<Post>,
}

/// A review row with author and like state resolved for the viewer.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReviewEntry {
    pub review: Review,
    pub author: Option<String>,
    pub like_count: usize,
    pub liked: bool,
}

/// Response from `campus review like`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LikeResponse {
    pub review_id: u64,
    pub liked: bool,
    pub like_count: usize,
}

/// Response from `campus profile show`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProfileResponse {
    pub user: User,
    pub avatar: String,
    pub stats: ProfileStats,
}

/// Response from `campus auth status`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct SessionResponse {
    pub logged_in: bool,
    pub user: Option<User>,
}

/// Response from `campus admin stats`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AdminStatsResponse {
    pub totals: DashboardStats,
    pub content_items: usize,
    pub lectures: LevelCounts,
    pub programs: ProgramCounts,
    pub users: UserCounts,
}

/// Response from delete commands.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct DeleteResponse {
    pub entity: String,
    pub id: u64,
    pub deleted: bool,
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;

    #[test]
    fn program_kind_by_slug() {
        let mut program = Program {
            id: 1,
            slug: String::from("membership"),
            title: String::from("Membership"),
            description: String::new(),
            has_common_course: false,
            created_at: Utc::now(),
        };
        assert_eq!(program_kind(&program), "Member Course");
        program.slug = String::from("text-influencer");
        assert_eq!(program_kind(&program), "Master Course");
    }
}
