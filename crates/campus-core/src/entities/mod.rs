//! Entity structs for all Campus domain objects.
//!
//! Each entity mirrors a record returned by the catalog API or held in a mock
//! table. All structs derive `Serialize`, `Deserialize`, and `JsonSchema` for
//! JSON roundtrip and shape validation. Relations (`program_id`, `author_id`)
//! are plain ids; nothing enforces that the referenced record exists.

mod lecture;
mod post;
mod program;
mod review;
mod user;
mod waitlist;

pub use lecture::{DEFAULT_CATEGORY, Lecture, NewLecture};
pub use post::{NewPost, Post};
pub use program::{NewProgram, Program};
pub use review::{NewReview, Review};
pub use user::{NewUser, User};
pub use waitlist::{NewWaitlistEntry, WaitlistEntry};

/// Common surface of every stored record.
pub trait Entity: Clone + Send + Sync + 'static {
    /// Entity name used in error messages and logs.
    const KIND: &'static str;

    fn id(&self) -> u64;
}

impl Entity for User {
    const KIND: &'static str = "user";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Entity for Program {
    const KIND: &'static str = "program";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Entity for Lecture {
    const KIND: &'static str = "lecture";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Entity for Post {
    const KIND: &'static str = "post";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Entity for Review {
    const KIND: &'static str = "review";

    fn id(&self) -> u64 {
        self.id
    }
}

impl Entity for WaitlistEntry {
    const KIND: &'static str = "waitlist entry";

    fn id(&self) -> u64 {
        self.id
    }
}
