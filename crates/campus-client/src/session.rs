//! Persisted "current user" for the CLI.
//!
//! The session is a single JSON file holding the logged-in [`User`]. A
//! missing, unreadable, or corrupt file means "logged out"; problems are
//! logged, never fatal.

use std::fs;
use std::path::{Path, PathBuf};

use campus_core::entities::User;

use crate::error::ClientError;

pub struct SessionStore {
    path: Option<PathBuf>,
}

impl SessionStore {
    /// Store backed by `path`. `None` disables persistence (nothing is ever saved).
    #[must_use]
    pub const fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// The logged-in user, if any.
    #[must_use]
    pub fn load(&self) -> Option<User> {
        let path = self.path.as_ref()?;
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return None,
            Err(error) => {
                tracing::warn!(
                    %error,
                    path = %path.display(),
                    "failed to read session; treating as logged out"
                );
                return None;
            }
        };
        if raw.trim().is_empty() {
            return None;
        }
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(error) => {
                tracing::warn!(
                    %error,
                    path = %path.display(),
                    "corrupt session file; treating as logged out"
                );
                None
            }
        }
    }

    /// Persist `user` as the current user.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Session`] if no path is configured or the file
    /// cannot be written.
    pub fn save(&self, user: &User) -> Result<(), ClientError> {
        let path = self
            .path
            .as_ref()
            .ok_or_else(|| ClientError::Session("no session path configured".into()))?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| ClientError::Session(format!("mkdir {}: {e}", parent.display())))?;
        }
        let json = serde_json::to_string_pretty(user)
            .map_err(|e| ClientError::Session(format!("encode session: {e}")))?;
        fs::write(path, json)
            .map_err(|e| ClientError::Session(format!("write {}: {e}", path.display())))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            if let Err(e) = fs::set_permissions(path, fs::Permissions::from_mode(0o600)) {
                tracing::warn!("failed to chmod 0600 {}: {e}", path.display());
            }
        }

        Ok(())
    }

    /// Forget the current user. Clearing an absent session is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Session`] if the file exists but cannot be removed.
    pub fn clear(&self) -> Result<(), ClientError> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        match fs::remove_file(path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClientError::Session(format!(
                "failed to delete {}: {e}",
                path.display()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use campus_core::enums::UserRole;
    use chrono::Utc;
    use pretty_assertions::assert_eq;

    use super::*;

    fn user() -> User {
        User {
            id: 3,
            email: String::from("michael.chen@example.com"),
            role: UserRole::Student,
            is_admin: false,
            master_cohort: String::new(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn save_load_clear_cycle() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let store = SessionStore::new(Some(tmp.path().join("nested").join("current_user.json")));

        assert!(store.load().is_none());
        let user = user();
        store.save(&user).expect("save");
        assert_eq!(store.load(), Some(user));

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let mode = fs::metadata(store.path().unwrap())
                .expect("metadata")
                .permissions()
                .mode()
                & 0o777;
            assert_eq!(mode, 0o600, "session file should be 0600");
        }

        store.clear().expect("clear");
        assert!(store.load().is_none());
        store.clear().expect("second clear is a no-op");
    }

    #[test]
    fn corrupt_file_reads_as_logged_out() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("current_user.json");
        fs::write(&path, "{ not json").expect("write");
        assert!(SessionStore::new(Some(path)).load().is_none());
    }

    #[test]
    fn whitespace_file_reads_as_logged_out() {
        let tmp = tempfile::TempDir::new().expect("tmp dir");
        let path = tmp.path().join("current_user.json");
        fs::write(&path, "  \n").expect("write");
        assert!(SessionStore::new(Some(path)).load().is_none());
    }

    #[test]
    fn disabled_store_cannot_save() {
        let store = SessionStore::new(None);
        assert!(store.load().is_none());
        assert!(matches!(store.save(&user()), Err(ClientError::Session(_))));
        assert!(store.clear().is_ok());
    }
}
