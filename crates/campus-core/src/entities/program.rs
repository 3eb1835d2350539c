use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A course grouping lectures under a slug.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Program {
    pub id: u64,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub has_common_course: bool,
    pub created_at: DateTime<Utc>,
}

/// Fields supplied when creating a program.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewProgram {
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub has_common_course: bool,
}

impl NewProgram {
    #[must_use]
    pub fn into_program(self, id: u64, created_at: DateTime<Utc>) -> Program {
        Program {
            id,
            slug: self.slug,
            title: self.title,
            description: self.description,
            has_common_course: self.has_common_course,
            created_at,
        }
    }
}
