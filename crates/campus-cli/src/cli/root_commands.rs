use clap::Subcommand;

use crate::cli::subcommands::{
    AdminCommands, AuthCommands, InsightCommands, LectureCommands, ProfileCommands,
    ProgramCommands, ReviewCommands, WaitlistCommands,
};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Featured programs and the latest insights.
    Home,
    /// Programs.
    Program {
        #[command(subcommand)]
        action: ProgramCommands,
    },
    /// Lectures.
    Lecture {
        #[command(subcommand)]
        action: LectureCommands,
    },
    /// Insights.
    Insight {
        #[command(subcommand)]
        action: InsightCommands,
    },
    /// Reviews.
    Review {
        #[command(subcommand)]
        action: ReviewCommands,
    },
    /// Program waitlists.
    Waitlist {
        #[command(subcommand)]
        action: WaitlistCommands,
    },
    /// Login, signup, and logout.
    Auth {
        #[command(subcommand)]
        action: AuthCommands,
    },
    /// The current user's profile.
    Profile {
        #[command(subcommand)]
        action: ProfileCommands,
    },
    /// Admin dashboard.
    Admin {
        #[command(subcommand)]
        action: AdminCommands,
    },
}
