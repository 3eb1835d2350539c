//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

const fn default_featured_programs() -> usize {
    2
}

const fn default_recent_posts() -> usize {
    3
}

const fn default_related_posts() -> usize {
    3
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,

    /// Programs shown on the home page.
    #[serde(default = "default_featured_programs")]
    pub featured_programs: usize,

    /// Posts shown on the home page.
    #[serde(default = "default_recent_posts")]
    pub recent_posts: usize,

    /// Related posts shown under an insight.
    #[serde(default = "default_related_posts")]
    pub related_posts: usize,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_limit: default_limit(),
            featured_programs: default_featured_programs(),
            recent_posts: default_recent_posts(),
            related_posts: default_related_posts(),
        }
    }
}
