//! Review update.

use serde::{Deserialize, Serialize};

use crate::entities::Review;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub likes: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub featured: Option<bool>,
}

impl ReviewUpdate {
    pub fn apply(&self, review: &mut Review) {
        super::set(&mut review.text, self.text.as_ref());
        super::set(&mut review.likes, self.likes.as_ref());
        super::set(&mut review.featured, self.featured.as_ref());
    }
}
