//! Lecture access gating.
//!
//! Access is decided per program slug:
//!
//! ```text
//! membership       → every lecture, for everyone
//! text-influencer  → anonymous: master_common only
//!                    logged in: master role, or master_common lectures
//! anything else    → every lecture
//! ```
//!
//! The listing and navigation helpers here all route through [`can_access`],
//! so a lecture that is locked in a program listing is also skipped by
//! previous/next navigation.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{Lecture, User};
use crate::enums::{LectureLevel, UserRole};

/// Slug of the open membership program.
pub const MEMBERSHIP_SLUG: &str = "membership";

/// Slug of the master program gated by role.
pub const MASTER_PROGRAM_SLUG: &str = "text-influencer";

/// Whether `user` may open `lecture` inside the program identified by `program_slug`.
///
/// `program_slug` is `None` when the lecture's program could not be resolved;
/// such lectures are treated like any unrestricted program.
#[must_use]
pub fn can_access(program_slug: Option<&str>, user: Option<&User>, lecture: &Lecture) -> bool {
    match program_slug {
        Some(MASTER_PROGRAM_SLUG) => {
            lecture.level == LectureLevel::MasterCommon
                || user.is_some_and(|user| user.role == UserRole::Master)
        }
        _ => true,
    }
}

/// Why a locked lecture cannot be opened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum AccessDenial {
    LoginRequired,
    MasterRequired,
}

impl AccessDenial {
    /// Short label for lecture listings.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::LoginRequired => "Login required",
            Self::MasterRequired => "Master access required",
        }
    }

    /// Full sentence for the lecture page.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::LoginRequired => "Please log in to access this lecture.",
            Self::MasterRequired => "This lecture requires master level access.",
        }
    }
}

impl std::fmt::Display for AccessDenial {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Reason shown for a locked lecture, depending only on whether someone is logged in.
#[must_use]
pub const fn denial_reason(user: Option<&User>) -> AccessDenial {
    if user.is_some() {
        AccessDenial::MasterRequired
    } else {
        AccessDenial::LoginRequired
    }
}

/// Access decision for a single lecture.
#[must_use]
pub fn check(
    program_slug: Option<&str>,
    user: Option<&User>,
    lecture: &Lecture,
) -> Result<(), AccessDenial> {
    if can_access(program_slug, user, lecture) {
        Ok(())
    } else {
        Err(denial_reason(user))
    }
}

// ---------------------------------------------------------------------------
// Listing
// ---------------------------------------------------------------------------

/// A lecture annotated with the viewer's access.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GatedLecture {
    pub id: u64,
    pub title: String,
    pub order: u32,
    pub level: LectureLevel,
    pub badge: Option<String>,
    pub accessible: bool,
    pub locked_reason: Option<String>,
}

/// Lectures of one category, in `order`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct CategoryGroup {
    pub category: String,
    pub lectures: Vec<GatedLecture>,
}

/// Group lectures by category and annotate each with access for `user`.
///
/// Categories keep the order in which they first appear in `lectures`.
#[must_use]
pub fn gated_listing(
    program_slug: Option<&str>,
    user: Option<&User>,
    lectures: &[Lecture],
) -> Vec<CategoryGroup> {
    crate::ordering::group_by_category(lectures)
        .into_iter()
        .map(|(category, group)| CategoryGroup {
            category,
            lectures: group
                .iter()
                .map(|lecture| {
                    let decision = check(program_slug, user, lecture);
                    GatedLecture {
                        id: lecture.id,
                        title: lecture.title.clone(),
                        order: lecture.order,
                        level: lecture.level,
                        badge: lecture.level.badge().map(String::from),
                        accessible: decision.is_ok(),
                        locked_reason: decision.err().map(|reason| reason.label().to_string()),
                    }
                })
                .collect(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Navigation
// ---------------------------------------------------------------------------

/// A neighbouring lecture reachable from the lecture page.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LectureLink {
    pub id: u64,
    pub title: String,
}

impl From<&Lecture> for LectureLink {
    fn from(lecture: &Lecture) -> Self {
        Self {
            id: lecture.id,
            title: lecture.title.clone(),
        }
    }
}

/// Position of a lecture within its program and its accessible neighbours.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LectureNavigation {
    /// 1-based position among all program lectures; 0 if the lecture is not in the list.
    pub position: usize,
    pub total: usize,
    pub accessible_total: usize,
    pub previous: Option<LectureLink>,
    pub next: Option<LectureLink>,
}

/// Compute navigation for `current_id` within `program_lectures`, which must
/// already be sorted by `order`.
///
/// `previous` is the closest earlier lecture the user can open and `next` the
/// closest later one; locked lectures in between are skipped.
#[must_use]
pub fn navigation(
    program_slug: Option<&str>,
    user: Option<&User>,
    program_lectures: &[Lecture],
    current_id: u64,
) -> LectureNavigation {
    let allowed = |lecture: &&Lecture| can_access(program_slug, user, lecture);
    let index = program_lectures.iter().position(|l| l.id == current_id);

    let (previous, next) = index.map_or((None, None), |index| {
        let previous = program_lectures[..index]
            .iter()
            .rev()
            .find(allowed)
            .map(LectureLink::from);
        let next = program_lectures[index + 1..]
            .iter()
            .find(allowed)
            .map(LectureLink::from);
        (previous, next)
    });

    LectureNavigation {
        position: index.map_or(0, |index| index + 1),
        total: program_lectures.len(),
        accessible_total: program_lectures.iter().filter(allowed).count(),
        previous,
        next,
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn lecture(id: u64, order: u32, level: LectureLevel, category: &str) -> Lecture {
        Lecture {
            id,
            program_id: 2,
            title: format!("Lecture {id}"),
            content: String::new(),
            category: category.to_string(),
            level,
            order,
            created_at: Utc::now(),
        }
    }

    fn user(role: UserRole) -> User {
        User {
            id: 7,
            email: String::from("someone@example.com"),
            role,
            is_admin: false,
            master_cohort: String::new(),
            created_at: Utc::now(),
        }
    }

    #[rstest]
    #[case(LectureLevel::Member)]
    #[case(LectureLevel::Master)]
    #[case(LectureLevel::MasterCommon)]
    fn membership_is_open_to_everyone(#[case] level: LectureLevel) {
        let lecture = lecture(1, 1, level, "");
        assert!(can_access(Some(MEMBERSHIP_SLUG), None, &lecture));
        for role in UserRole::ALL {
            assert!(can_access(Some(MEMBERSHIP_SLUG), Some(&user(role)), &lecture));
        }
    }

    #[rstest]
    #[case(None, LectureLevel::MasterCommon, true)]
    #[case(None, LectureLevel::Master, false)]
    #[case(None, LectureLevel::Member, false)]
    #[case(Some(UserRole::Student), LectureLevel::MasterCommon, true)]
    #[case(Some(UserRole::Student), LectureLevel::Master, false)]
    #[case(Some(UserRole::Both), LectureLevel::Member, false)]
    #[case(Some(UserRole::Master), LectureLevel::Master, true)]
    #[case(Some(UserRole::Master), LectureLevel::Member, true)]
    fn master_program_gates_by_role(
        #[case] role: Option<UserRole>,
        #[case] level: LectureLevel,
        #[case] expected: bool,
    ) {
        let viewer = role.map(user);
        let lecture = lecture(1, 1, level, "");
        assert_eq!(
            can_access(Some(MASTER_PROGRAM_SLUG), viewer.as_ref(), &lecture),
            expected
        );
    }

    #[test]
    fn unknown_program_is_open() {
        let lecture = lecture(1, 1, LectureLevel::Master, "");
        assert!(can_access(Some("cooking"), None, &lecture));
        assert!(can_access(None, None, &lecture));
    }

    #[test]
    fn denial_reason_depends_on_login() {
        assert_eq!(denial_reason(None), AccessDenial::LoginRequired);
        assert_eq!(
            denial_reason(Some(&user(UserRole::Student))),
            AccessDenial::MasterRequired
        );
    }

    #[test]
    fn listing_groups_and_annotates() {
        let lectures = vec![
            lecture(3, 2, LectureLevel::Master, "Writing"),
            lecture(1, 1, LectureLevel::MasterCommon, "Writing"),
            lecture(2, 1, LectureLevel::Master, ""),
        ];
        let groups = gated_listing(Some(MASTER_PROGRAM_SLUG), None, &lectures);

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].category, "Writing");
        let ids: Vec<u64> = groups[0].lectures.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert!(groups[0].lectures[0].accessible);
        assert_eq!(groups[0].lectures[0].badge.as_deref(), Some("Common"));
        assert!(!groups[0].lectures[1].accessible);
        assert_eq!(
            groups[0].lectures[1].locked_reason.as_deref(),
            Some("Login required")
        );
        assert_eq!(groups[1].category, "General");
    }

    #[test]
    fn navigation_skips_locked_neighbours() {
        let lectures = vec![
            lecture(1, 1, LectureLevel::MasterCommon, ""),
            lecture(2, 2, LectureLevel::Master, ""),
            lecture(3, 3, LectureLevel::MasterCommon, ""),
            lecture(4, 4, LectureLevel::Master, ""),
        ];
        let nav = navigation(Some(MASTER_PROGRAM_SLUG), None, &lectures, 3);

        assert_eq!(nav.position, 3);
        assert_eq!(nav.total, 4);
        assert_eq!(nav.accessible_total, 2);
        assert_eq!(nav.previous.map(|l| l.id), Some(1));
        assert_eq!(nav.next, None);
    }

    #[test]
    fn navigation_for_master_sees_everything() {
        let lectures = vec![
            lecture(1, 1, LectureLevel::MasterCommon, ""),
            lecture(2, 2, LectureLevel::Master, ""),
            lecture(3, 3, LectureLevel::Master, ""),
        ];
        let master = user(UserRole::Master);
        let nav = navigation(Some(MASTER_PROGRAM_SLUG), Some(&master), &lectures, 2);

        assert_eq!(nav.previous.map(|l| l.id), Some(1));
        assert_eq!(nav.next.map(|l| l.id), Some(3));
        assert_eq!(nav.accessible_total, 3);
    }

    #[test]
    fn navigation_for_missing_lecture_has_no_neighbours() {
        let lectures = vec![lecture(1, 1, LectureLevel::Member, "")];
        let nav = navigation(Some(MEMBERSHIP_SLUG), None, &lectures, 99);
        assert_eq!(nav.position, 0);
        assert!(nav.previous.is_none() && nav.next.is_none());
    }
}
