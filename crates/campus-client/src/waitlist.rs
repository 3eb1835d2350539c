//! Waitlist sign-ups (in-memory).

use std::time::Duration;

use campus_core::entities::{NewWaitlistEntry, WaitlistEntry};
use campus_core::updates::WaitlistUpdate;
use campus_core::validate;
use chrono::Utc;

use crate::error::ClientError;
use crate::seed;
use crate::table::{MemoryTable, next_id};

pub struct WaitlistService {
    table: MemoryTable<WaitlistEntry>,
}

impl WaitlistService {
    #[must_use]
    pub fn seeded(latency: Duration) -> Self {
        Self::with_rows(seed::waitlist(), latency)
    }

    #[must_use]
    pub fn with_rows(rows: Vec<WaitlistEntry>, latency: Duration) -> Self {
        Self {
            table: MemoryTable::new(rows, latency),
        }
    }

    pub async fn all(&self) -> Vec<WaitlistEntry> {
        self.table.all().await
    }

    pub async fn get(&self, id: u64) -> Result<WaitlistEntry, ClientError> {
        self.table.get(id).await
    }

    /// Add `email` to the waitlist for `program_slug`.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Validation`] for a malformed email and
    /// [`ClientError::Rejected`] when the pair is already listed.
    pub async fn join(&self, new: NewWaitlistEntry) -> Result<WaitlistEntry, ClientError> {
        validate::email(&new.email)?;
        validate::required("program", &new.program_slug)?;
        let new = NewWaitlistEntry {
            email: new.email.trim().to_string(),
            program_slug: new.program_slug,
        };
        self.table
            .transact(|rows| {
                validate::not_waitlisted(&new.email, &new.program_slug, rows.iter())?;
                let entry = new.into_entry(next_id(rows), Utc::now());
                rows.push(entry.clone());
                Ok(entry)
            })
            .await
    }

    pub async fn update(
        &self,
        id: u64,
        update: &WaitlistUpdate,
    ) -> Result<WaitlistEntry, ClientError> {
        if let Some(email) = &update.email {
            validate::email(email)?;
        }
        if let Some(slug) = &update.program_slug {
            validate::required("program", slug)?;
        }
        self.table
            .transact(|rows| {
                let index = rows
                    .iter()
                    .position(|e| e.id == id)
                    .ok_or_else(|| ClientError::not_found("waitlist entry", id))?;
                let mut updated = rows[index].clone();
                update.apply(&mut updated);
                updated.email = updated.email.trim().to_string();
                let others = rows.iter().filter(|e| e.id != id);
                validate::not_waitlisted(&updated.email, &updated.program_slug, others)?;
                rows[index] = updated.clone();
                Ok(updated)
            })
            .await
    }

    pub async fn delete(&self, id: u64) -> Result<WaitlistEntry, ClientError> {
        self.table.remove(id).await
    }

    pub async fn count(&self) -> usize {
        self.table.len().await
    }
}
