//! Post update.

use serde::{Deserialize, Serialize};

use crate::entities::Post;
use crate::enums::PostStatus;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub excerpt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<PostStatus>,
}

impl PostUpdate {
    pub fn apply(&self, post: &mut Post) {
        super::set(&mut post.slug, self.slug.as_ref());
        super::set(&mut post.title, self.title.as_ref());
        super::set(&mut post.content, self.content.as_ref());
        super::set(&mut post.excerpt, self.excerpt.as_ref());
        super::set(&mut post.tags, self.tags.as_ref());
        super::set(&mut post.status, self.status.as_ref());
    }
}
