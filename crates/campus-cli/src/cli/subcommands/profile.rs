use clap::Subcommand;

/// Profile commands for the current user.
#[derive(Clone, Debug, Subcommand)]
pub enum ProfileCommands {
    /// Show the profile with activity stats.
    Show,
    /// Change profile fields.
    Update {
        #[arg(long)]
        email: Option<String>,
        /// student, member, both, free, master
        #[arg(long)]
        role: Option<String>,
        #[arg(long)]
        master_cohort: Option<String>,
    },
}
