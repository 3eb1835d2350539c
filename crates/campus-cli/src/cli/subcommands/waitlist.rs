use clap::Subcommand;

/// Waitlist commands.
#[derive(Clone, Debug, Subcommand)]
pub enum WaitlistCommands {
    /// Join the waitlist of a program.
    Join {
        #[arg(long)]
        email: String,
        /// Program slug.
        #[arg(long)]
        program: String,
    },
}
