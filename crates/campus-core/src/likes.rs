//! Review like toggling.
//!
//! Likes are stored as stringified user ids so the list survives JSON
//! roundtrips through the catalog API unchanged.

/// Whether `user_id` appears in `likes`.
#[must_use]
pub fn has_liked(likes: &[String], user_id: u64) -> bool {
    let id = user_id.to_string();
    likes.iter().any(|like| *like == id)
}

/// Add `user_id` to `likes` if absent, otherwise remove every occurrence of it.
///
/// Returns `true` when the user now likes the review.
pub fn toggle_like(likes: &mut Vec<String>, user_id: u64) -> bool {
    let id = user_id.to_string();
    if likes.contains(&id) {
        likes.retain(|like| *like != id);
        false
    } else {
        likes.push(id);
        true
    }
}
