//! Case-insensitive substring search over entity fields.
//!
//! An empty term matches everything, so list commands can pass their
//! `--search` value through unconditionally. Terms are not trimmed.

use crate::entities::{Lecture, Post, Program, User};

/// Case-insensitive substring test. An empty `term` always matches.
#[must_use]
pub fn contains_ci(haystack: &str, term: &str) -> bool {
    term.is_empty() || haystack.to_lowercase().contains(&term.to_lowercase())
}

fn any_field(fields: &[&str], term: &str) -> bool {
    term.is_empty() || fields.iter().any(|field| contains_ci(field, term))
}

/// Public program list: title and description.
#[must_use]
pub fn program_matches(program: &Program, term: &str) -> bool {
    any_field(&[program.title.as_str(), program.description.as_str()], term)
}

/// Admin program table: title, description, and slug.
#[must_use]
pub fn admin_program_matches(program: &Program, term: &str) -> bool {
    any_field(
        &[
            program.title.as_str(),
            program.description.as_str(),
            program.slug.as_str(),
        ],
        term,
    )
}

/// Admin lecture table: title, content, and category.
#[must_use]
pub fn lecture_matches(lecture: &Lecture, term: &str) -> bool {
    any_field(
        &[
            lecture.title.as_str(),
            lecture.content.as_str(),
            lecture.category.as_str(),
        ],
        term,
    )
}

/// Admin user table and user search: email, role, and cohort.
#[must_use]
pub fn user_matches(user: &User, term: &str) -> bool {
    any_field(
        &[
            user.email.as_str(),
            user.role.as_str(),
            user.master_cohort.as_str(),
        ],
        term,
    )
}

/// Insight list: title and content.
#[must_use]
pub fn insight_matches(post: &Post, term: &str) -> bool {
    any_field(&[post.title.as_str(), post.content.as_str()], term)
}

/// Post service search: published posts matching title, content, excerpt, or a tag.
#[must_use]
pub fn post_matches(post: &Post, term: &str) -> bool {
    if !post.is_published() {
        return false;
    }
    any_field(
        &[
            post.title.as_str(),
            post.content.as_str(),
            post.excerpt.as_str(),
        ],
        term,
    )
        || post.tags.iter().any(|tag| contains_ci(tag, term))
}

/// Keep the items of `items` accepted by `matches` for `term`.
pub fn filter<'a, T>(
    items: &'a [T],
    term: &str,
    matches: impl Fn(&T, &str) -> bool,
) -> Vec<&'a T> {
    items.iter().filter(|item| matches(item, term)).collect()
}
