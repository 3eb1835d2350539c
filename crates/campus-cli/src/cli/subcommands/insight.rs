use clap::Subcommand;

/// Insight (blog post) commands.
#[derive(Clone, Debug, Subcommand)]
pub enum InsightCommands {
    /// List published insights, newest first.
    List {
        /// Case-insensitive match on title or content.
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show an insight with its author and related posts.
    Show { slug: String },
}
