//! Seed rows for the in-memory tables.
//!
//! Every process starts from this data; nothing written to the mock tables
//! survives a restart.

use campus_core::entities::{Lecture, Post, Program, Review, User, WaitlistEntry};
use campus_core::enums::{LectureLevel, PostStatus, UserRole};
use chrono::{DateTime, TimeZone, Utc};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn user(
    id: u64,
    email: &str,
    role: UserRole,
    is_admin: bool,
    cohort: &str,
    created: DateTime<Utc>,
) -> User {
    User {
        id,
        email: email.to_string(),
        role,
        is_admin,
        master_cohort: cohort.to_string(),
        created_at: created,
    }
}

#[must_use]
#[rustfmt::skip]
pub fn users() -> Vec<User> {
    vec![
        user(1, "john.doe@example.com", UserRole::Both, true, "", at(2023, 1, 15, 8, 30)),
        user(2, "sarah.wilson@example.com", UserRole::Master, false, "Cohort 3", at(2023, 2, 22, 10, 15)),
        user(3, "michael.chen@example.com", UserRole::Student, false, "", at(2023, 3, 10, 14, 20)),
        user(4, "emily.rodriguez@example.com", UserRole::Member, false, "", at(2023, 4, 5, 11, 45)),
        user(5, "david.kim@example.com", UserRole::Free, false, "", at(2023, 5, 18, 16, 30)),
    ]
}

#[must_use]
pub fn programs() -> Vec<Program> {
    vec![
        Program {
            id: 1,
            slug: String::from("membership"),
            title: String::from("Membership"),
            description: String::from(
                "Weekly writing lessons for every member: habits, structure, and publishing.",
            ),
            has_common_course: false,
            created_at: at(2023, 1, 10, 9, 0),
        },
        Program {
            id: 2,
            slug: String::from("text-influencer"),
            title: String::from("Text Influencer"),
            description: String::from(
                "The master program for building an audience through writing.",
            ),
            has_common_course: true,
            created_at: at(2023, 6, 1, 9, 0),
        },
    ]
}

fn lecture(
    id: u64,
    program_id: u64,
    order: u32,
    category: &str,
    level: LectureLevel,
    title: &str,
    content: &str,
) -> Lecture {
    Lecture {
        id,
        program_id,
        title: title.to_string(),
        content: content.to_string(),
        category: category.to_string(),
        level,
        order,
        created_at: at(2023, 7, 1, 9, 0),
    }
}

#[must_use]
#[rustfmt::skip]
pub fn lectures() -> Vec<Lecture> {
    use LectureLevel::{Master, MasterCommon, Member};
    vec![
        lecture(1, 1, 1, "Getting Started", Member, "Welcome to Membership", "How the weekly lessons work and where to find them."),
        lecture(2, 1, 2, "Getting Started", Member, "Setting Up Your Writing Routine", "Pick a time, a place, and a word count you can keep."),
        lecture(3, 1, 3, "Writing Basics", Member, "Structure Before Style", "Outline the argument first; polish sentences last."),
        lecture(4, 1, 4, "", Member, "Publishing Your First Piece", "Choose a platform and ship something small."),
        lecture(5, 2, 1, "Foundations", MasterCommon, "Orientation", "What the master program covers and how cohorts run."),
        lecture(6, 2, 2, "Foundations", MasterCommon, "Finding Your Voice", "Exercises for writing the way you talk."),
        lecture(7, 2, 3, "Audience", Master, "Hooks That Hold Attention", "Open with tension and pay it off quickly."),
        lecture(8, 2, 4, "Audience", Master, "Growing a Following", "Consistency, replies, and collaboration."),
        lecture(9, 2, 5, "Audience", MasterCommon, "Cohort Q&A Recording", "Answers to the most common cohort questions."),
        lecture(10, 2, 6, "Monetization", Master, "Turning Readers Into Customers", "Offers, newsletters, and pricing."),
    ]
}

#[allow(clippy::too_many_arguments)]
fn post(
    id: u64,
    slug: &str,
    title: &str,
    excerpt: &str,
    content: &str,
    author_id: u64,
    published: Option<DateTime<Utc>>,
    created: DateTime<Utc>,
    tags: &[&str],
) -> Post {
    Post {
        id,
        slug: slug.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        excerpt: excerpt.to_string(),
        author_id,
        published_at: published,
        created_at: created,
        updated_at: created,
        tags: tags.iter().map(ToString::to_string).collect(),
        status: if published.is_some() {
            PostStatus::Published
        } else {
            PostStatus::Draft
        },
    }
}

#[must_use]
pub fn posts() -> Vec<Post> {
    vec![
        post(
            1,
            "write-every-day",
            "Why We Write Every Day",
            "Small daily output beats occasional bursts.",
            "Daily writing builds the muscle that makes longer pieces possible...",
            1,
            Some(at(2024, 1, 15, 10, 0)),
            at(2024, 1, 15, 10, 0),
            &["Habits", "Writing"],
        ),
        post(
            2,
            "editing-in-three-passes",
            "Editing in Three Passes",
            "Structure, clarity, then rhythm.",
            "Separate the edits so each pass has one job...",
            2,
            Some(at(2024, 1, 12, 14, 30)),
            at(2024, 1, 12, 14, 30),
            &["Editing", "Craft"],
        ),
        post(
            3,
            "headlines-that-work",
            "Headlines That Work",
            "Promise something specific and keep the promise.",
            "A good headline names the reader's problem and hints at the payoff...",
            1,
            Some(at(2024, 1, 8, 9, 15)),
            at(2024, 1, 8, 9, 15),
            &["Headlines", "Audience"],
        ),
        post(
            4,
            "from-reader-to-writer",
            "From Reader to Writer",
            "What changed when I started publishing weekly.",
            "For years I only read about writing; here is what publishing taught me...",
            3,
            Some(at(2024, 1, 5, 16, 45)),
            at(2024, 1, 5, 16, 45),
            &["Story", "Habits"],
        ),
        post(
            5,
            "notes-on-newsletters",
            "Notes on Newsletters",
            "Drafting thoughts on newsletter cadence.",
            "Unfinished notes on how often to send...",
            2,
            None,
            at(2024, 1, 20, 8, 0),
            &["Newsletters"],
        ),
    ]
}

fn review(
    id: u64,
    author_id: u64,
    text: &str,
    likes: &[u64],
    featured: bool,
    created: DateTime<Utc>,
) -> Review {
    Review {
        id,
        author_id,
        text: text.to_string(),
        likes: likes.iter().map(ToString::to_string).collect(),
        featured,
        created_at: created,
        updated_at: created,
    }
}

#[must_use]
#[rustfmt::skip]
pub fn reviews() -> Vec<Review> {
    vec![
        review(1, 1, "The lectures are well-structured and easy to follow.", &[2, 3], false, at(2024, 1, 15, 10, 30)),
        review(2, 2, "Practical examples every week. I publish more than ever.", &[1], true, at(2024, 1, 18, 14, 22)),
        review(3, 3, "The depth of knowledge shared is remarkable.", &[], false, at(2024, 1, 20, 9, 15)),
        review(4, 4, "Clear explanations and good pacing.", &[1, 2, 5], false, at(2024, 1, 22, 16, 45)),
        review(5, 5, "Solid content, though some sections feel rushed.", &[], false, at(2024, 1, 25, 11, 30)),
    ]
}

#[must_use]
pub fn waitlist() -> Vec<WaitlistEntry> {
    vec![
        WaitlistEntry {
            id: 1,
            email: String::from("user1@example.com"),
            program_slug: String::from("text-influencer"),
            created_at: at(2024, 1, 15, 10, 0),
        },
        WaitlistEntry {
            id: 2,
            email: String::from("user2@example.com"),
            program_slug: String::from("text-influencer"),
            created_at: at(2024, 1, 16, 14, 30),
        },
        WaitlistEntry {
            id: 3,
            email: String::from("user3@example.com"),
            program_slug: String::from("membership"),
            created_at: at(2024, 1, 17, 9, 15),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_has_exactly_one_admin() {
        assert_eq!(users().iter().filter(|u| u.is_admin).count(), 1);
    }

    #[test]
    fn seed_lectures_point_at_seed_programs() {
        let programs = programs();
        for lecture in lectures() {
            assert!(
                programs.iter().any(|p| p.id == lecture.program_id),
                "lecture {} has no program",
                lecture.id
            );
        }
    }

    #[test]
    fn seed_timestamps_are_real_dates() {
        assert!(users().iter().all(|u| u.created_at.timestamp() > 0));
    }
}
