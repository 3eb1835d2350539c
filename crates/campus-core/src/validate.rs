//! Input checks shared by sign-up, the waitlist form, and admin forms.

use crate::entities::{NewLecture, NewProgram, WaitlistEntry};
use crate::errors::CoreError;

/// An email must have something on both sides of a single `@`.
pub fn email(value: &str) -> Result<(), CoreError> {
    let value = value.trim();
    match value.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
        {
            Ok(())
        }
        _ => Err(CoreError::Validation(format!(
            "'{value}' is not a valid email address"
        ))),
    }
}

/// Reject empty or whitespace-only values for `field`.
pub fn required(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    Ok(())
}

/// Slugs are lowercase ASCII letters, digits, and single hyphens.
pub fn slug(value: &str) -> Result<(), CoreError> {
    required("slug", value)?;
    let valid = value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
        && !value.starts_with('-')
        && !value.ends_with('-')
        && !value.contains("--");
    if valid {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "slug '{value}' must use lowercase letters, digits, and single hyphens"
        )))
    }
}

/// Sign-up form: valid email, non-empty password, matching confirmation.
pub fn signup(email_value: &str, password: &str, confirm: &str) -> Result<(), CoreError> {
    email(email_value)?;
    required("password", password)?;
    if password != confirm {
        return Err(CoreError::Validation("Passwords do not match".into()));
    }
    Ok(())
}

pub fn new_program(program: &NewProgram) -> Result<(), CoreError> {
    slug(&program.slug)?;
    required("title", &program.title)
}

pub fn new_lecture(lecture: &NewLecture) -> Result<(), CoreError> {
    required("title", &lecture.title)
}

/// Reject `slug` when one of the `taken` slugs of `entity` already uses it.
pub fn unique_slug<'a>(
    entity: &str,
    slug: &str,
    mut taken: impl Iterator<Item = &'a str>,
) -> Result<(), CoreError> {
    if taken.any(|existing| existing == slug) {
        return Err(CoreError::Rejected(format!(
            "a {entity} with slug '{slug}' already exists"
        )));
    }
    Ok(())
}

/// Reject `email` when an account already uses it, ignoring case.
pub fn unique_email<'a>(
    email: &str,
    mut taken: impl Iterator<Item = &'a str>,
) -> Result<(), CoreError> {
    let email = email.trim();
    if taken.any(|existing| existing.eq_ignore_ascii_case(email)) {
        return Err(CoreError::Rejected(format!(
            "an account for {email} already exists"
        )));
    }
    Ok(())
}

/// Reject a waitlist sign-up whose `(email, program_slug)` pair is listed.
pub fn not_waitlisted<'a>(
    email: &str,
    program_slug: &str,
    mut entries: impl Iterator<Item = &'a WaitlistEntry>,
) -> Result<(), CoreError> {
    if entries.any(|entry| entry.is_for(email, program_slug)) {
        return Err(CoreError::Rejected(
            "You're already on the waitlist for this program!".into(),
        ));
    }
    Ok(())
}
