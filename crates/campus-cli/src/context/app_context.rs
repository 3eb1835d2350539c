use anyhow::Context;
use campus_client::Platform;
use campus_config::CampusConfig;
use campus_core::entities::User;

/// Shared application resources initialized once at startup.
pub struct AppContext {
    pub config: CampusConfig,
    pub platform: Platform,
    /// The user stored in the session file when the command started.
    pub current_user: Option<User>,
}

impl AppContext {
    /// Build the platform for the configured backend and read the session.
    pub fn init(config: CampusConfig) -> anyhow::Result<Self> {
        let platform = Platform::from_config(&config).context("failed to set up catalog client")?;
        let current_user = platform.current_user();
        match &current_user {
            Some(user) => tracing::debug!(user = user.id, email = %user.email, "session loaded"),
            None => tracing::debug!("no active session"),
        }
        Ok(Self {
            config,
            platform,
            current_user,
        })
    }

    /// Seeded in-memory context for command tests.
    #[cfg(test)]
    pub fn in_memory(
        session: campus_client::SessionStore,
        current_user: Option<User>,
    ) -> Self {
        Self {
            config: CampusConfig::default(),
            platform: Platform::in_memory(session),
            current_user,
        }
    }

    /// The logged-in user, or an error telling how to log in.
    pub fn require_user(&self) -> anyhow::Result<&User> {
        self.current_user.as_ref().ok_or_else(|| {
            anyhow::anyhow!("You need to log in first. Run 'campus auth login --email <email>'.")
        })
    }

    /// The logged-in user if they are an admin.
    pub fn require_admin(&self) -> anyhow::Result<&User> {
        let user = self.require_user()?;
        if !user.is_admin {
            anyhow::bail!("Admin access required. {} is not an admin.", user.email);
        }
        Ok(user)
    }

    /// Where the session is persisted, for status output.
    pub fn session_path(&self) -> Option<String> {
        self.platform
            .session
            .path()
            .map(|path| path.display().to_string())
    }
}
