use clap::Subcommand;

/// Review commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ReviewCommands {
    /// List reviews, featured first.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Write a review as the current user.
    Create {
        #[arg(long)]
        text: String,
    },
    /// Like or unlike a review.
    Like { id: u64 },
}
