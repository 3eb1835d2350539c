pub mod admin;
pub mod auth;
pub mod dispatch;
pub mod home;
pub mod insight;
pub mod lecture;
pub mod profile;
pub mod program;
pub mod review;
pub mod shared;
pub mod waitlist;
