//! Insight posts (in-memory).

use std::time::Duration;

use campus_core::entities::{NewPost, Post};
use campus_core::enums::PostStatus;
use campus_core::updates::PostUpdate;
use campus_core::{ordering, search, validate};
use chrono::Utc;

use crate::error::ClientError;
use crate::seed;
use crate::table::MemoryTable;

pub struct PostService {
    table: MemoryTable<Post>,
}

impl PostService {
    #[must_use]
    pub fn seeded(latency: Duration) -> Self {
        Self::with_rows(seed::posts(), latency)
    }

    #[must_use]
    pub fn with_rows(rows: Vec<Post>, latency: Duration) -> Self {
        Self {
            table: MemoryTable::new(rows, latency),
        }
    }

    /// Published posts, newest first.
    pub async fn published(&self) -> Vec<Post> {
        let mut posts = self.table.filter(Post::is_published).await;
        ordering::sort_posts(&mut posts);
        posts
    }

    /// Every post including drafts, newest first.
    pub async fn all(&self) -> Vec<Post> {
        let mut posts = self.table.all().await;
        ordering::sort_posts(&mut posts);
        posts
    }

    pub async fn get(&self, id: u64) -> Result<Post, ClientError> {
        self.table.get(id).await
    }

    pub async fn by_slug(&self, slug: &str) -> Result<Post, ClientError> {
        self.table
            .find(|p| p.slug == slug)
            .await
            .ok_or_else(|| ClientError::not_found("post", slug))
    }

    /// Published posts matching `term` in title, content, excerpt, or tags.
    pub async fn search(&self, term: &str) -> Vec<Post> {
        let mut posts = self.table.filter(|p| search::post_matches(p, term)).await;
        ordering::sort_posts(&mut posts);
        posts
    }

    /// Up to `limit` published posts other than `post_id`, newest first.
    pub async fn related(&self, post_id: u64, limit: usize) -> Vec<Post> {
        let mut posts = self.published().await;
        posts.retain(|p| p.id != post_id);
        posts.truncate(limit);
        posts
    }

    pub async fn create(&self, new: NewPost) -> Result<Post, ClientError> {
        validate::slug(&new.slug)?;
        validate::required("title", &new.title)?;
        self.table
            .transact(|rows| {
                let taken = rows.iter().map(|p| p.slug.as_str());
                validate::unique_slug("post", &new.slug, taken)?;
                let post = new.into_post(crate::table::next_id(rows), Utc::now());
                rows.push(post.clone());
                Ok(post)
            })
            .await
    }

    /// Apply `update`, bump `updated_at`, and stamp `published_at` on first publish.
    pub async fn update(&self, id: u64, update: &PostUpdate) -> Result<Post, ClientError> {
        if let Some(slug) = &update.slug {
            validate::slug(slug)?;
        }
        if let Some(title) = &update.title {
            validate::required("title", title)?;
        }
        self.table
            .transact(|rows| {
                if let Some(slug) = &update.slug {
                    let others = rows.iter().filter(|p| p.id != id);
                    validate::unique_slug("post", slug, others.map(|p| p.slug.as_str()))?;
                }
                let post = rows
                    .iter_mut()
                    .find(|p| p.id == id)
                    .ok_or_else(|| ClientError::not_found("post", id))?;
                let now = Utc::now();
                update.apply(post);
                post.updated_at = now;
                if post.status == PostStatus::Published && post.published_at.is_none() {
                    post.published_at = Some(now);
                }
                Ok(post.clone())
            })
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<Post, ClientError> {
        self.table.remove(id).await
    }

    pub async fn count(&self) -> usize {
        self.table.len().await
    }
}
