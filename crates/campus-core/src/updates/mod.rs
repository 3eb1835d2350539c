//! Update types for entity mutations.
//!
//! Each update struct carries `Option` fields; only `Some` fields are applied.
//! The same struct is serialized as the JSON body of a `PUT` (changed fields
//! only) and applied in place by the in-memory tables.

pub mod lecture;
pub mod post;
pub mod program;
pub mod review;
pub mod user;
pub mod waitlist;

pub use lecture::{LectureUpdate, LectureUpdateBuilder};
pub use post::PostUpdate;
pub use program::{ProgramUpdate, ProgramUpdateBuilder};
pub use review::ReviewUpdate;
pub use user::{UserUpdate, UserUpdateBuilder};
pub use waitlist::WaitlistUpdate;

/// Overwrite `slot` when `value` is `Some`.
fn set<T: Clone>(slot: &mut T, value: Option<&T>) {
    if let Some(value) = value {
        slot.clone_from(value);
    }
}
