//! User repository trait

use async_trait::async_trait;

use super::entity::{NewUser, User, UserChanges, UserId};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Statement-level access to the `users` table.
///
/// Each method maps to exactly one statement; composing them (insert then
/// read back, update then re-select) is the service's job.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// INSERT a row, returning the generated id (0 when the store reported none)
    async fn insert(&self, user: &NewUser) -> Result<u64, DomainError>;

    /// SELECT every row in the store's natural order
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// SELECT one row by id
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// UPDATE the given columns, returning the affected row count
    async fn update(&self, id: UserId, changes: &UserChanges) -> Result<u64, DomainError>;

    /// DELETE by id, returning the affected row count
    async fn delete(&self, id: UserId) -> Result<u64, DomainError>;
}
