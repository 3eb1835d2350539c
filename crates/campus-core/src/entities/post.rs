use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::PostStatus;

/// An insight: a blog post shown in the platform's content section.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Post {
    pub id: u64,
    pub slug: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    pub author_id: u64,
    pub published_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: PostStatus,
}

impl Post {
    /// Date used for "newest first" ordering.
    #[must_use]
    pub fn display_date(&self) -> DateTime<Utc> {
        self.published_at.unwrap_or(self.created_at)
    }

    #[must_use]
    pub fn is_published(&self) -> bool {
        self.status == PostStatus::Published
    }
}

/// Fields supplied when creating a post.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewPost {
    pub slug: String,
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub excerpt: String,
    pub author_id: u64,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub status: PostStatus,
}

impl NewPost {
    /// Published posts get `published_at` stamped with the creation time.
    #[must_use]
    pub fn into_post(self, id: u64, now: DateTime<Utc>) -> Post {
        let published_at = (self.status == PostStatus::Published).then_some(now);
        Post {
            id,
            slug: self.slug,
            title: self.title,
            content: self.content,
            excerpt: self.excerpt,
            author_id: self.author_id,
            published_at,
            created_at: now,
            updated_at: now,
            tags: self.tags,
            status: self.status,
        }
    }
}
