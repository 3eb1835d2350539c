//! Sort orders used by list views.

use std::cmp::Reverse;

use crate::entities::{Lecture, Post, Program, Review, User};

/// Featured reviews first, then newest first.
pub fn sort_reviews(reviews: &mut [Review]) {
    reviews.sort_by_key(|review| (Reverse(review.featured), Reverse(review.created_at)));
}

/// Newest first by publication date, falling back to creation date for drafts.
pub fn sort_posts(posts: &mut [Post]) {
    posts.sort_by_key(|post| Reverse(post.display_date()));
}

/// Admin user table: newest accounts first.
pub fn sort_users(users: &mut [User]) {
    users.sort_by_key(|user| Reverse(user.created_at));
}

/// Admin program table: newest programs first.
pub fn sort_programs(programs: &mut [Program]) {
    programs.sort_by_key(|program| Reverse(program.created_at));
}

/// Admin lecture table: grouped by program, then by `order`.
pub fn sort_admin_lectures(lectures: &mut [Lecture]) {
    lectures.sort_by_key(|lecture| (lecture.program_id, lecture.order, lecture.id));
}

/// Lectures of a single program in reading order.
pub fn sort_by_order(lectures: &mut [Lecture]) {
    lectures.sort_by_key(|lecture| (lecture.order, lecture.id));
}

/// Group lectures by display category.
///
/// Groups appear in the order their category is first seen; lectures inside a
/// group are sorted by `order`. Empty categories land in `"General"`.
#[must_use]
pub fn group_by_category(lectures: &[Lecture]) -> Vec<(String, Vec<&Lecture>)> {
    let mut groups: Vec<(String, Vec<&Lecture>)> = Vec::new();
    for lecture in lectures {
        let category = lecture.category_or_default();
        match groups.iter_mut().find(|(name, _)| name == category) {
            Some((_, members)) => members.push(lecture),
            None => groups.push((category.to_string(), vec![lecture])),
        }
    }
    for (_, members) in &mut groups {
        members.sort_by_key(|lecture| (lecture.order, lecture.id));
    }
    groups
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::enums::{LectureLevel, PostStatus};

    fn review(id: u64, featured: bool, days: i64) -> Review {
        let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap() + Duration::days(days);
        Review {
            id,
            author_id: 1,
            text: String::from("Great"),
            likes: Vec::new(),
            featured,
            created_at: at,
            updated_at: at,
        }
    }

    fn post(id: u64, published_days: Option<i64>, created_days: i64) -> Post {
        let base = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        Post {
            id,
            slug: format!("post-{id}"),
            title: String::new(),
            content: String::new(),
            excerpt: String::new(),
            author_id: 1,
            published_at: published_days.map(|d| base + Duration::days(d)),
            created_at: base + Duration::days(created_days),
            updated_at: base,
            tags: Vec::new(),
            status: PostStatus::Published,
        }
    }

    fn lecture(id: u64, program_id: u64, order: u32, category: &str) -> Lecture {
        Lecture {
            id,
            program_id,
            title: String::new(),
            content: String::new(),
            category: category.to_string(),
            level: LectureLevel::Member,
            order,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn featured_reviews_come_first_then_newest() {
        let mut reviews = vec![
            review(1, false, 10),
            review(2, true, 1),
            review(3, false, 20),
            review(4, true, 5),
        ];
        sort_reviews(&mut reviews);
        let ids: Vec<u64> = reviews.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![4, 2, 3, 1]);
    }

    #[test]
    fn posts_sort_by_published_then_created() {
        let mut posts = vec![post(1, Some(3), 0), post(2, None, 7), post(3, Some(5), 0)];
        sort_posts(&mut posts);
        let ids: Vec<u64> = posts.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![2, 3, 1]);
    }

    #[test]
    fn admin_lectures_group_by_program() {
        let mut lectures = vec![
            lecture(1, 2, 2, ""),
            lecture(2, 1, 3, ""),
            lecture(3, 2, 1, ""),
            lecture(4, 1, 1, ""),
        ];
        sort_admin_lectures(&mut lectures);
        let ids: Vec<u64> = lectures.iter().map(|l| l.id).collect();
        assert_eq!(ids, vec![4, 2, 3, 1]);
    }

    #[test]
    fn categories_keep_first_appearance_order() {
        let lectures = vec![
            lecture(1, 1, 3, "Basics"),
            lecture(2, 1, 1, ""),
            lecture(3, 1, 1, "Basics"),
            lecture(4, 1, 2, "  "),
        ];
        let groups = group_by_category(&lectures);
        let summary: Vec<(String, Vec<u64>)> = groups
            .into_iter()
            .map(|(name, members)| (name, members.iter().map(|l| l.id).collect()))
            .collect();
        assert_eq!(
            summary,
            vec![
                (String::from("Basics"), vec![3, 1]),
                (String::from("General"), vec![2, 4]),
            ]
        );
    }
}
