//! # campus-client
//!
//! Data access for Campus.
//!
//! - [`Catalog`]: programs and lectures, from the REST API or seeded
//!   in-memory tables depending on `api.backend`
//! - In-memory services for posts, reviews, users, and the waitlist, each
//!   applying the configured artificial latency
//! - [`SessionStore`]: the persisted current user
//! - [`Platform`]: page-level loaders that combine all of the above

pub mod catalog;
pub mod platform;
pub mod posts;
pub mod rest;
pub mod reviews;
pub mod seed;
pub mod session;
pub mod table;
pub mod users;
pub mod waitlist;

mod error;
mod http;

pub use catalog::{Catalog, MemoryCatalog};
pub use error::ClientError;
pub use platform::Platform;
pub use rest::RestCatalog;
pub use session::SessionStore;
