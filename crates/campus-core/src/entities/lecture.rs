use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::LectureLevel;

/// Category label used when a lecture has none.
pub const DEFAULT_CATEGORY: &str = "General";

/// A single lesson inside a program.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Lecture {
    pub id: u64,
    pub program_id: u64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub level: LectureLevel,
    #[serde(default)]
    pub order: u32,
    pub created_at: DateTime<Utc>,
}

impl Lecture {
    /// Category used for grouping, falling back to [`DEFAULT_CATEGORY`].
    #[must_use]
    pub fn category_or_default(&self) -> &str {
        let trimmed = self.category.trim();
        if trimmed.is_empty() {
            DEFAULT_CATEGORY
        } else {
            trimmed
        }
    }
}

/// Fields supplied when creating a lecture.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewLecture {
    pub program_id: u64,
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub level: LectureLevel,
    #[serde(default = "first_order")]
    pub order: u32,
}

const fn first_order() -> u32 {
    1
}

impl NewLecture {
    #[must_use]
    pub fn into_lecture(self, id: u64, created_at: DateTime<Utc>) -> Lecture {
        Lecture {
            id,
            program_id: self.program_id,
            title: self.title,
            content: self.content,
            category: self.category,
            level: self.level,
            order: self.order,
            created_at,
        }
    }
}
