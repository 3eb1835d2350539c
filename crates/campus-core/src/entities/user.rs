use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::UserRole;

/// A platform account. Only `role` and `is_admin` influence what the user may open.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub email: String,
    pub role: UserRole,
    #[serde(default)]
    pub is_admin: bool,
    /// Cohort label for master students, empty for everyone else.
    #[serde(default)]
    pub master_cohort: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Single uppercase letter used as the avatar placeholder.
    #[must_use]
    pub fn avatar_letter(&self) -> char {
        self.email
            .chars()
            .next()
            .map_or('U', |c| c.to_ascii_uppercase())
    }
}

/// Fields supplied when signing up or creating a user.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub master_cohort: String,
}

impl NewUser {
    /// A self-registered account: student role, no cohort, no admin rights.
    #[must_use]
    pub fn signup(email: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            role: UserRole::Student,
            is_admin: false,
            master_cohort: String::new(),
        }
    }

    #[must_use]
    pub fn into_user(self, id: u64, created_at: DateTime<Utc>) -> User {
        User {
            id,
            email: self.email,
            role: self.role,
            is_admin: self.is_admin,
            master_cohort: self.master_cohort,
            created_at,
        }
    }
}
