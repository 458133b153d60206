//! User service implementing the CRUD operations

use std::sync::Arc;

use serde::{Deserialize, Deserializer};

use crate::domain::user::{
    is_valid_user_input, validate_email, validate_name, Age, NewUser, User, UserChanges,
    UserId, UserRepository,
};
use crate::domain::DomainError;

/// Body of a create request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub age: Option<Age>,
}

/// Body of an update request.
///
/// The outer `Option` records whether the field was sent at all, the inner
/// one whether it was `null`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateUserRequest {
    #[serde(default, deserialize_with = "present")]
    pub name: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub email: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub age: Option<Option<Age>>,
}

fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

/// User service for the `users` resource
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Insert a user and return the row as stored
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        let (name, email) = match (request.name, request.email) {
            (Some(name), Some(email)) if is_valid_user_input(Some(&name), Some(&email)) => {
                (name, email)
            }
            _ => {
                return Err(DomainError::validation(
                    "Invalid input: name and valid email required",
                ))
            }
        };

        let new_user = NewUser {
            name,
            email,
            age: request.age,
        };

        let id = self.repository.insert(&new_user).await?;
        let id = i64::try_from(id)
            .ok()
            .filter(|id| *id > 0)
            .map(UserId::new)
            .ok_or_else(|| DomainError::internal("Failed to insert user"))?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::internal("Failed to insert user"))
    }

    /// List all users
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repository.find_all().await
    }

    /// Get a user by the raw path id
    pub async fn get(&self, id: &str) -> Result<User, DomainError> {
        let id = parse_id(id)?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(user_not_found)
    }

    /// Overwrite the fields present in the request, then return the current row
    pub async fn update(&self, id: &str, request: UpdateUserRequest) -> Result<User, DomainError> {
        let changes = validate_changes(request)?;
        let id = parse_id(id)?;

        self.repository.update(id, &changes).await?;

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(user_not_found)
    }

    /// Delete a user; a missing row is reported as not found
    pub async fn delete(&self, id: &str) -> Result<(), DomainError> {
        let id = parse_id(id)?;

        match self.repository.delete(id).await? {
            0 => Err(user_not_found()),
            _ => Ok(()),
        }
    }
}

fn validate_changes(request: UpdateUserRequest) -> Result<UserChanges, DomainError> {
    let name = match request.name {
        Some(Some(name)) if validate_name(&name).is_ok() => Some(name),
        Some(_) => return Err(DomainError::validation("Invalid name")),
        None => None,
    };

    let email = match request.email {
        Some(Some(email)) if validate_email(&email).is_ok() => Some(email),
        Some(_) => return Err(DomainError::validation("Invalid email")),
        None => None,
    };

    Ok(UserChanges {
        name,
        email,
        age: request.age,
    })
}

fn parse_id(raw: &str) -> Result<UserId, DomainError> {
    UserId::parse(raw).ok_or_else(user_not_found)
}

fn user_not_found() -> DomainError {
    DomainError::not_found("User not found")
}
