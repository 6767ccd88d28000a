//! The signup flow: collect field values, validate, append to the roster.
//!
//! Validation is purely syntactic and reports the first failure only. The
//! email pattern accepts any non-space local part and domain followed by a
//! dot and a 2–3 letter suffix; four-letter suffixes like `.info` are
//! rejected. That limit is long-standing observed behavior and is kept
//! as-is.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

use crate::models::{AstronautRecord, SignupInput};
use crate::store::RosterStore;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^ ]+@[^ ]+\.[a-z]{2,3}$").expect("invalid email pattern"));

/// A rejected signup. Reported to the user verbatim; the roster is left
/// untouched.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in all required fields (including experience).")]
    MissingRequired,

    #[error("Please enter a valid email address.")]
    InvalidEmail,
}

pub fn email_is_valid(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Validate a signup and append it to the roster.
///
/// Checks run in order and the first failure wins: all five required fields
/// non-empty, then the email pattern. On success the stored record is
/// returned; optional fields default to the empty string.
pub fn submit(store: &RosterStore, input: SignupInput) -> Result<AstronautRecord, ValidationError> {
    let name = input.name.trim();
    let email = input.email.trim();
    let role = input.role.as_str();
    let destination = input.destination.as_str();
    let experience = input.experience.as_str();

    if name.is_empty()
        || email.is_empty()
        || role.is_empty()
        || destination.is_empty()
        || experience.is_empty()
    {
        return Err(ValidationError::MissingRequired);
    }

    if !email_is_valid(email) {
        return Err(ValidationError::InvalidEmail);
    }

    let record = AstronautRecord {
        name: name.to_string(),
        email: email.to_string(),
        role: role.to_string(),
        destination: destination.to_string(),
        experience: experience.to_string(),
        snack: input.snack.as_deref().unwrap_or("").trim().to_string(),
        motto: input.motto.as_deref().unwrap_or("").trim().to_string(),
    };

    store.append(record.clone());
    tracing::debug!(name = %record.name, "signup accepted");
    Ok(record)
}
