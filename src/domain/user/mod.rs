//! User domain
//!
//! Entity, shallow validation and the repository trait for the single
//! `users` resource.

mod entity;
mod repository;
mod validation;

pub use entity::{Age, NewUser, User, UserChanges, UserId};
pub use repository::UserRepository;
pub use validation::{is_valid_user_input, validate_email, validate_name, UserValidationError};

#[cfg(test)]
pub use repository::MockUserRepository;
