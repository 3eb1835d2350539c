//! Waitlist entry update.

use serde::{Deserialize, Serialize};

use crate::entities::WaitlistEntry;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaitlistUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub program_slug: Option<String>,
}

impl WaitlistUpdate {
    pub fn apply(&self, entry: &mut WaitlistEntry) {
        super::set(&mut entry.email, self.email.as_ref());
        super::set(&mut entry.program_slug, self.program_slug.as_ref());
    }
}
