//! Catalog API configuration.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Default API root used by the catalog endpoints.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3001/api";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

/// Default request timeout in seconds.
const fn default_timeout_secs() -> u64 {
    10
}

/// Where program and lecture data comes from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Backend {
    /// HTTP calls against `base_url`.
    Rest,
    /// Seeded in-memory tables; works without a server.
    #[default]
    Mock,
}

impl Backend {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Rest => "rest",
            Self::Mock => "mock",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// API root, e.g. `http://localhost:3001/api`. No trailing slash needed.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub backend: Backend,

    /// Per-request timeout for the REST backend, in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            backend: Backend::default(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    /// `base_url` without a trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Whether the REST backend has what it needs.
    #[must_use]
    pub fn is_configured(&self) -> bool {
        let url = self.base_url();
        url.starts_with("http://") || url.starts_with("https://")
    }
}
