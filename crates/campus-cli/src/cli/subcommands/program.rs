use clap::Subcommand;

/// Program commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ProgramCommands {
    /// List programs with their lecture counts.
    List {
        /// Case-insensitive match on title or description.
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show a program's lectures grouped by category.
    Show { slug: String },
}
