//! Roles, access tiers, and publication states for Campus.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`,
//! matching the JSON returned by the catalog API.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// UserRole
// ---------------------------------------------------------------------------

/// Enrollment role of a user.
///
/// Only [`UserRole::Master`] changes what a user can open; the other roles
/// are informational labels shown on profiles and in the admin user list.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    #[default]
    Student,
    Member,
    Both,
    Free,
    Master,
}

impl UserRole {
    pub const ALL: [Self; 5] = [
        Self::Student,
        Self::Member,
        Self::Both,
        Self::Free,
        Self::Master,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Student => "student",
            Self::Member => "member",
            Self::Both => "both",
            Self::Free => "free",
            Self::Master => "master",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// LectureLevel
// ---------------------------------------------------------------------------

/// Access tier tag on a lecture.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum LectureLevel {
    #[default]
    Member,
    Master,
    MasterCommon,
}

impl LectureLevel {
    pub const ALL: [Self; 3] = [Self::Member, Self::Master, Self::MasterCommon];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Master => "master",
            Self::MasterCommon => "master_common",
        }
    }

    /// Badge shown next to a lecture title. Plain member lectures carry none.
    #[must_use]
    pub const fn badge(self) -> Option<&'static str> {
        match self {
            Self::Member => None,
            Self::Master => Some("Master Only"),
            Self::MasterCommon => Some("Common"),
        }
    }
}

impl fmt::Display for LectureLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// PostStatus
// ---------------------------------------------------------------------------

/// Publication state of an insight post.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum PostStatus {
    #[default]
    Draft,
    Published,
}

impl PostStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Draft => "draft",
            Self::Published => "published",
        }
    }
}

impl fmt::Display for PostStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
