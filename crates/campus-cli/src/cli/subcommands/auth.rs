use clap::{Args, Subcommand};

/// Session commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuthCommands {
    /// Log in with an existing account.
    Login(AuthLoginArgs),
    /// Create a student account and log in.
    Signup(AuthSignupArgs),
    /// Forget the current user.
    Logout,
    /// Show who is logged in.
    Status,
}

#[derive(Clone, Debug, Args)]
pub struct AuthLoginArgs {
    #[arg(long)]
    pub email: String,
    /// Accepted for parity with the login form; not checked.
    #[arg(long)]
    pub password: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct AuthSignupArgs {
    #[arg(long)]
    pub email: String,
    #[arg(long)]
    pub password: String,
    #[arg(long)]
    pub confirm_password: String,
}
