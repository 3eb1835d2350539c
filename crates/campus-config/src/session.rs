//! Current-user session configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SessionConfig {
    /// Override for the session file. Empty means the platform data directory.
    #[serde(default)]
    pub path: String,
}

impl SessionConfig {
    /// Resolved session file path: `path` if set, else
    /// `<data dir>/campus/current_user.json`.
    #[must_use]
    pub fn resolve_path(&self) -> Option<PathBuf> {
        if self.path.is_empty() {
            dirs::data_dir().map(|dir| dir.join("campus").join("current_user.json"))
        } else {
            Some(PathBuf::from(&self.path))
        }
    }
}
