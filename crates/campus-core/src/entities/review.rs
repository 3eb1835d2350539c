use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A user testimonial. `likes` holds the ids of users who liked it, as strings.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Review {
    pub id: u64,
    pub author_id: u64,
    pub text: String,
    #[serde(default)]
    pub likes: Vec<String>,
    #[serde(default)]
    pub featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when submitting a review.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewReview {
    pub author_id: u64,
    pub text: String,
    #[serde(default)]
    pub featured: bool,
}

impl NewReview {
    /// New reviews always start with no likes.
    #[must_use]
    pub fn into_review(self, id: u64, now: DateTime<Utc>) -> Review {
        Review {
            id,
            author_id: self.author_id,
            text: self.text,
            likes: Vec::new(),
            featured: self.featured,
            created_at: now,
            updated_at: now,
        }
    }
}
