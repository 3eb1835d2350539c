//! Reviews and likes (in-memory).

use std::time::Duration;

use campus_core::entities::{NewReview, Review};
use campus_core::updates::ReviewUpdate;
use campus_core::{likes, ordering, validate};
use chrono::Utc;

use crate::error::ClientError;
use crate::seed;
use crate::table::MemoryTable;

pub struct ReviewService {
    table: MemoryTable<Review>,
}

impl ReviewService {
    #[must_use]
    pub fn seeded(latency: Duration) -> Self {
        Self::with_rows(seed::reviews(), latency)
    }

    #[must_use]
    pub fn with_rows(rows: Vec<Review>, latency: Duration) -> Self {
        Self {
            table: MemoryTable::new(rows, latency),
        }
    }

    /// All reviews, featured first then newest.
    pub async fn all(&self) -> Vec<Review> {
        let mut reviews = self.table.all().await;
        ordering::sort_reviews(&mut reviews);
        reviews
    }

    pub async fn get(&self, id: u64) -> Result<Review, ClientError> {
        self.table.get(id).await
    }

    pub async fn by_author(&self, author_id: u64) -> Vec<Review> {
        let mut reviews = self.table.filter(|r| r.author_id == author_id).await;
        ordering::sort_reviews(&mut reviews);
        reviews
    }

    pub async fn create(&self, new: NewReview) -> Result<Review, ClientError> {
        validate::required("review text", &new.text)?;
        Ok(self
            .table
            .insert(|id| new.into_review(id, Utc::now()))
            .await)
    }

    pub async fn update(&self, id: u64, update: &ReviewUpdate) -> Result<Review, ClientError> {
        if let Some(text) = &update.text {
            validate::required("review text", text)?;
        }
        self.table
            .update(id, |review| {
                update.apply(review);
                review.updated_at = Utc::now();
            })
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<Review, ClientError> {
        self.table.remove(id).await
    }

    /// Toggle `user_id` in the review's likes and return the updated review.
    ///
    /// The read and write happen under one lock; concurrent toggles from
    /// separate processes are last-write-wins.
    pub async fn toggle_like(&self, id: u64, user_id: u64) -> Result<Review, ClientError> {
        self.table
            .update(id, |review| {
                likes::toggle_like(&mut review.likes, user_id);
                review.updated_at = Utc::now();
            })
            .await
    }

    pub async fn count(&self) -> usize {
        self.table.len().await
    }
}
