mod admin;
mod auth;
mod insight;
mod lecture;
mod profile;
mod program;
mod review;
mod waitlist;

pub use admin::{AdminCommands, AdminLectureCommands, AdminProgramCommands, AdminUserCommands};
pub use auth::{AuthCommands, AuthLoginArgs, AuthSignupArgs};
pub use insight::InsightCommands;
pub use lecture::LectureCommands;
pub use profile::ProfileCommands;
pub use program::ProgramCommands;
pub use review::ReviewCommands;
pub use waitlist::WaitlistCommands;
