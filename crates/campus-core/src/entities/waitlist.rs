use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// An email waiting for enrollment in a program to open.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct WaitlistEntry {
    pub id: u64,
    pub email: String,
    pub program_slug: String,
    pub created_at: DateTime<Utc>,
}

impl WaitlistEntry {
    /// Whether this entry is for `email` on `program_slug`.
    #[must_use]
    pub fn is_for(&self, email: &str, program_slug: &str) -> bool {
        self.email == email && self.program_slug == program_slug
    }
}

/// Fields supplied by the waitlist form.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewWaitlistEntry {
    pub email: String,
    pub program_slug: String,
}

impl NewWaitlistEntry {
    #[must_use]
    pub fn into_entry(self, id: u64, created_at: DateTime<Utc>) -> WaitlistEntry {
        WaitlistEntry {
            id,
            email: self.email,
            program_slug: self.program_slug,
            created_at,
        }
    }
}
