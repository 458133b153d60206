//! Domain layer - Core entities, validation and repository traits

pub mod error;
pub mod user;

pub use error::DomainError;
pub use user::{Age, NewUser, User, UserChanges, UserId, UserRepository};
