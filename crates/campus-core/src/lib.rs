//! # campus-core
//!
//! Domain types and pure view logic for Campus.
//!
//! This crate provides the foundational types shared across all Campus crates:
//! - Entity structs for users, programs, lectures, posts, reviews, and the waitlist
//! - Roles, lecture levels, and post states
//! - Update types applied field-by-field to stored records
//! - Lecture access gating and navigation
//! - Review like toggling
//! - Search, ordering, and count helpers used by list views
//! - Input validation for forms
//! - CLI response types
//! - Cross-cutting error types

pub mod access;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod likes;
pub mod ordering;
pub mod responses;
pub mod search;
pub mod stats;
pub mod updates;
pub mod validate;
