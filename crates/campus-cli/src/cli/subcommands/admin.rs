use clap::Subcommand;

/// Admin dashboard commands. Require an admin session.
#[derive(Clone, Debug, Subcommand)]
pub enum AdminCommands {
    /// Dashboard totals.
    Stats,
    /// User management.
    Users {
        #[command(subcommand)]
        action: AdminUserCommands,
    },
    /// Program management.
    Programs {
        #[command(subcommand)]
        action: AdminProgramCommands,
    },
    /// Lecture management.
    Lectures {
        #[command(subcommand)]
        action: AdminLectureCommands,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum AdminUserCommands {
    /// List users, newest first.
    List {
        /// Match on email, role, or cohort.
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Grant or revoke admin rights.
    ToggleAdmin { id: u64 },
    /// Delete a user.
    Delete {
        id: u64,
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum AdminProgramCommands {
    /// List programs, newest first.
    List {
        /// Match on title, slug, or description.
        #[arg(long)]
        search: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Create a program.
    Create {
        #[arg(long)]
        slug: String,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        description: String,
        /// Program includes common-course lectures.
        #[arg(long)]
        common_course: bool,
    },
    /// Update a program.
    Update {
        id: u64,
        #[arg(long)]
        slug: Option<String>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        common_course: Option<bool>,
    },
    /// Delete a program. Its lectures are kept.
    Delete {
        id: u64,
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Clone, Debug, Subcommand)]
pub enum AdminLectureCommands {
    /// List lectures grouped by program.
    List {
        /// Match on title, content, or category.
        #[arg(long)]
        search: Option<String>,
        /// Only lectures of this program id.
        #[arg(long)]
        program: Option<u64>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Create a lecture.
    Create {
        /// Program id.
        #[arg(long)]
        program: u64,
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        content: String,
        #[arg(long, default_value = "")]
        category: String,
        /// member, master, master_common
        #[arg(long, default_value = "member")]
        level: String,
        #[arg(long, default_value_t = 1)]
        order: u32,
    },
    /// Update a lecture.
    Update {
        id: u64,
        #[arg(long)]
        program: Option<u64>,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        content: Option<String>,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        level: Option<String>,
        #[arg(long)]
        order: Option<u32>,
    },
    /// Delete a lecture.
    Delete {
        id: u64,
        #[arg(long)]
        yes: bool,
    },
}
