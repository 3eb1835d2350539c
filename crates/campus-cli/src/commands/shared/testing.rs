use campus_client::SessionStore;
use tempfile::TempDir;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};
use crate::context::AppContext;

pub fn flags() -> GlobalFlags {
    GlobalFlags {
        format: OutputFormat::Raw,
        limit: None,
        quiet: true,
        verbose: false,
        color: ColorMode::Never,
    }
}

/// Seeded context with a session file in a temp dir, logged in as `user_id`.
pub async fn ctx(user_id: Option<u64>) -> (AppContext, TempDir) {
    let tmp = TempDir::new().expect("tmp dir");
    let session = || SessionStore::new(Some(tmp.path().join("current_user.json")));
    let probe = AppContext::in_memory(session(), None);
    let user = match user_id {
        Some(id) => Some(probe.platform.users.get(id).await.expect("seeded user")),
        None => None,
    };
    (AppContext::in_memory(session(), user), tmp)
}
