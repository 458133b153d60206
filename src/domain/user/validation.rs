//! Shallow shape checks for user payloads

use once_cell::sync::Lazy;
use regex::Regex;
use thiserror::Error;

/// Loose email shape: something, `@`, something, `.`, something.
/// Deliberately unanchored, so any substring of that shape is accepted.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+@\S+\.\S+").unwrap());

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq)]
pub enum UserValidationError {
    #[error("Invalid name")]
    InvalidName,

    #[error("Invalid email")]
    InvalidEmail,
}

/// A name must contain something other than whitespace
pub fn validate_name(name: &str) -> Result<(), UserValidationError> {
    if name.trim().is_empty() {
        return Err(UserValidationError::InvalidName);
    }

    Ok(())
}

/// Check the email against the loose pattern. No normalization is applied.
pub fn validate_email(email: &str) -> Result<(), UserValidationError> {
    if !EMAIL_PATTERN.is_match(email) {
        return Err(UserValidationError::InvalidEmail);
    }

    Ok(())
}

/// Both fields are required for a new user
pub fn is_valid_user_input(name: Option<&str>, email: Option<&str>) -> bool {
    let name_ok = name.is_some_and(|n| validate_name(n).is_ok());
    let email_ok = email.is_some_and(|e| validate_email(e).is_ok());

    name_ok && email_ok
}
