use clap::Subcommand;

/// Lecture commands.
#[derive(Clone, Debug, Subcommand)]
pub enum LectureCommands {
    /// Show a lecture with previous/next navigation.
    Show { id: u64 },
    /// Mark a lecture as completed.
    Complete { id: u64 },
    /// Show completion state of a lecture.
    Progress { id: u64 },
}
