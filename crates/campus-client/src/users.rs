//! User accounts (in-memory).
//!
//! The table always keeps at least one admin: deleting the last admin and
//! revoking the last admin's rights are both rejected.

use std::time::Duration;

use campus_core::entities::{NewUser, User};
use campus_core::updates::UserUpdate;
use campus_core::{ordering, search, validate};
use chrono::Utc;

use crate::error::ClientError;
use crate::seed;
use crate::table::{MemoryTable, next_id};

pub struct UserService {
    table: MemoryTable<User>,
}

fn other_admins(rows: &[User], id: u64) -> usize {
    rows.iter().filter(|u| u.id != id && u.is_admin).count()
}

fn find_mut(rows: &mut [User], id: u64) -> Result<&mut User, ClientError> {
    rows.iter_mut()
        .find(|u| u.id == id)
        .ok_or_else(|| ClientError::not_found("user", id))
}

impl UserService {
    #[must_use]
    pub fn seeded(latency: Duration) -> Self {
        Self::with_rows(seed::users(), latency)
    }

    #[must_use]
    pub fn with_rows(rows: Vec<User>, latency: Duration) -> Self {
        Self {
            table: MemoryTable::new(rows, latency),
        }
    }

    /// All users, newest accounts first.
    pub async fn all(&self) -> Vec<User> {
        let mut users = self.table.all().await;
        ordering::sort_users(&mut users);
        users
    }

    pub async fn get(&self, id: u64) -> Result<User, ClientError> {
        self.table.get(id).await
    }

    /// Exact, case-insensitive email lookup.
    pub async fn by_email(&self, email: &str) -> Option<User> {
        let email = email.trim();
        self.table
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .await
    }

    /// Users whose email, role, or cohort contains `term`.
    pub async fn search(&self, term: &str) -> Vec<User> {
        let mut users = self.table.filter(|u| search::user_matches(u, term)).await;
        ordering::sort_users(&mut users);
        users
    }

    /// Create an account. Emails are unique, compared case-insensitively.
    pub async fn create(&self, new: NewUser) -> Result<User, ClientError> {
        validate::email(&new.email)?;
        self.table
            .transact(|rows| {
                let email = new.email.trim().to_string();
                validate::unique_email(&email, rows.iter().map(|u| u.email.as_str()))?;
                let user = NewUser { email, ..new }.into_user(next_id(rows), Utc::now());
                rows.push(user.clone());
                Ok(user)
            })
            .await
    }

    /// Apply `update`. Clearing `is_admin` on the last admin is rejected.
    pub async fn update(&self, id: u64, update: &UserUpdate) -> Result<User, ClientError> {
        if let Some(email) = &update.email {
            validate::email(email)?;
        }
        self.table
            .transact(|rows| {
                if let Some(email) = &update.email {
                    let others = rows.iter().filter(|u| u.id != id);
                    validate::unique_email(email, others.map(|u| u.email.as_str()))?;
                }
                let remaining = other_admins(rows, id);
                let user = find_mut(rows, id)?;
                if user.is_admin && update.is_admin == Some(false) && remaining == 0 {
                    return Err(ClientError::Rejected(
                        "Cannot remove admin privileges from the last admin".into(),
                    ));
                }
                update.apply(user);
                Ok(user.clone())
            })
            .await
    }

    /// Flip `is_admin` for the user with `id`.
    pub async fn toggle_admin(&self, id: u64) -> Result<User, ClientError> {
        self.table
            .transact(|rows| {
                let remaining = other_admins(rows, id);
                let user = find_mut(rows, id)?;
                if user.is_admin && remaining == 0 {
                    return Err(ClientError::Rejected(
                        "Cannot remove admin privileges from the last admin".into(),
                    ));
                }
                user.is_admin = !user.is_admin;
                Ok(user.clone())
            })
            .await
    }

    /// Delete the user with `id`. Deleting the last admin is rejected.
    pub async fn delete(&self, id: u64) -> Result<User, ClientError> {
        self.table
            .transact(|rows| {
                let remaining = other_admins(rows, id);
                let index = rows
                    .iter()
                    .position(|u| u.id == id)
                    .ok_or_else(|| ClientError::not_found("user", id))?;
                if rows[index].is_admin && remaining == 0 {
                    return Err(ClientError::Rejected(
                        "Cannot delete the last admin user".into(),
                    ));
                }
                Ok(rows.remove(index))
            })
            .await
    }

    pub async fn count(&self) -> usize {
        self.table.len().await
    }
}
