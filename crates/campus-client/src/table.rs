//! In-memory record table backing the mock services.
//!
//! Rows live behind a `tokio::sync::RwLock`, so concurrent loads inside one
//! command are safe. Every call first sleeps for the configured latency to
//! mimic a network round-trip. Ids are allocated as `max(id) + 1`.

use std::time::Duration;

use campus_core::entities::Entity;
use tokio::sync::RwLock;

use crate::error::ClientError;

pub struct MemoryTable<T: Entity> {
    rows: RwLock<Vec<T>>,
    latency: Duration,
}

impl<T: Entity> MemoryTable<T> {
    #[must_use]
    pub fn new(rows: Vec<T>, latency: Duration) -> Self {
        Self {
            rows: RwLock::new(rows),
            latency,
        }
    }

    async fn delay(&self) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
    }

    /// Snapshot of every row, in insertion order.
    pub async fn all(&self) -> Vec<T> {
        self.delay().await;
        self.rows.read().await.clone()
    }

    /// Rows accepted by `keep`.
    pub async fn filter(&self, keep: impl Fn(&T) -> bool) -> Vec<T> {
        self.delay().await;
        self.rows
            .read()
            .await
            .iter()
            .filter(|row| keep(row))
            .cloned()
            .collect()
    }

    /// First row accepted by `pred`.
    pub async fn find(&self, pred: impl Fn(&T) -> bool) -> Option<T> {
        self.delay().await;
        self.rows.read().await.iter().find(|row| pred(row)).cloned()
    }

    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if no row has `id`.
    pub async fn get(&self, id: u64) -> Result<T, ClientError> {
        self.find(|row| row.id() == id)
            .await
            .ok_or_else(|| ClientError::not_found(T::KIND, id))
    }

    /// Insert the row produced by `build` under a freshly allocated id.
    pub async fn insert(&self, build: impl FnOnce(u64) -> T) -> T {
        self.delay().await;
        let mut rows = self.rows.write().await;
        let id = next_id(&rows);
        let row = build(id);
        rows.push(row.clone());
        tracing::debug!(kind = T::KIND, id, "inserted row");
        row
    }

    /// Apply `change` to the row with `id` and return the updated row.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if no row has `id`.
    pub async fn update(&self, id: u64, change: impl FnOnce(&mut T)) -> Result<T, ClientError> {
        self.delay().await;
        let mut rows = self.rows.write().await;
        let row = rows
            .iter_mut()
            .find(|row| row.id() == id)
            .ok_or_else(|| ClientError::not_found(T::KIND, id))?;
        change(row);
        Ok(row.clone())
    }

    /// Remove and return the row with `id`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::NotFound`] if no row has `id`.
    pub async fn remove(&self, id: u64) -> Result<T, ClientError> {
        self.delay().await;
        let mut rows = self.rows.write().await;
        let index = rows
            .iter()
            .position(|row| row.id() == id)
            .ok_or_else(|| ClientError::not_found(T::KIND, id))?;
        Ok(rows.remove(index))
    }

    /// Run `op` with exclusive access to all rows.
    ///
    /// Used when a check and a write must see the same state, e.g. keeping at
    /// least one admin.
    pub async fn transact<R>(
        &self,
        op: impl FnOnce(&mut Vec<T>) -> Result<R, ClientError>,
    ) -> Result<R, ClientError> {
        self.delay().await;
        let mut rows = self.rows.write().await;
        op(&mut rows)
    }

    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }
}

/// Next id for `rows`: one past the current maximum, starting at 1.
pub fn next_id<T: Entity>(rows: &[T]) -> u64 {
    rows.iter().map(Entity::id).max().map_or(1, |max| max + 1)
}
