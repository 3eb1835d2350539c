//! Cross-cutting error types for Campus.
//!
//! Transport errors (`ClientError`) and configuration errors (`ConfigError`)
//! live in their own crates; everything converges on `anyhow` in `campus-cli`.

use thiserror::Error;

/// Errors raised by the domain checks in [`crate::validate`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// The input is well-formed but conflicts with existing records.
    #[error("Rejected: {0}")]
    Rejected(String),
}
