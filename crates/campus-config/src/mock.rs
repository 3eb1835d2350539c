//! In-memory backend configuration.

use serde::{Deserialize, Serialize};

/// Default artificial latency per mock call, in milliseconds.
const fn default_latency_ms() -> u64 {
    300
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct MockConfig {
    /// Delay applied before every mock service call. `0` disables it.
    #[serde(default = "default_latency_ms")]
    pub latency_ms: u64,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}
