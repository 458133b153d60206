//! In-memory user repository implementation

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{NewUser, User, UserChanges, UserId, UserRepository};
use crate::domain::DomainError;

#[derive(Debug, Default)]
struct Table {
    rows: BTreeMap<UserId, User>,
    last_id: i64,
}

/// In-memory implementation of UserRepository.
///
/// Behaves like an auto-increment table: ids start at 1, are never reused,
/// and rows list in id order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryUserRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<u64, DomainError> {
        let mut table = self.table.write().await;
        table.last_id += 1;

        let id = UserId::new(table.last_id);
        table.rows.insert(
            id,
            User {
                id,
                name: user.name.clone(),
                email: user.email.clone(),
                age: user.age,
            },
        );

        Ok(table.last_id as u64)
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn update(&self, id: UserId, changes: &UserChanges) -> Result<u64, DomainError> {
        if changes.is_empty() {
            return Ok(0);
        }

        let mut table = self.table.write().await;

        match table.rows.get_mut(&id) {
            Some(user) => {
                changes.apply_to(user);
                Ok(1)
            }
            None => Ok(0),
        }
    }

    async fn delete(&self, id: UserId) -> Result<u64, DomainError> {
        let mut table = self.table.write().await;
        Ok(u64::from(table.rows.remove(&id).is_some()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Age;

    fn new_user(name: &str, email: &str, age: Option<f64>) -> NewUser {
        NewUser {
            name: name.to_string(),
            email: email.to_string(),
            age: age.map(Age::new),
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.insert(&new_user("Ann", "ann@example.com", Some(30.0))).await.unwrap();
        let second = repo.insert(&new_user("Bob", "bob@x.com", None)).await.unwrap();

        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let repo = InMemoryUserRepository::new();
        let id = repo.insert(&new_user("Ann", "ann@example.com", Some(30.0))).await.unwrap();

        let user = repo.find_by_id(UserId::new(id as i64)).await.unwrap().unwrap();
        assert_eq!(user.name, "Ann");
        assert_eq!(user.email, "ann@example.com");
        assert_eq!(user.age, Some(Age::new(30.0)));
    }

    #[tokio::test]
    async fn test_find_all_empty() {
        let repo = InMemoryUserRepository::new();
        assert!(repo.find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_ids_not_reused_after_delete() {
        let repo = InMemoryUserRepository::new();
        repo.insert(&new_user("Ann", "ann@example.com", None)).await.unwrap();
        repo.delete(UserId::new(1)).await.unwrap();

        let id = repo.insert(&new_user("Bob", "bob@x.com", None)).await.unwrap();
        assert_eq!(id, 2);
    }

    #[tokio::test]
    async fn test_update_missing_row_affects_nothing() {
        let repo = InMemoryUserRepository::new();
        let changes = UserChanges {
            name: Some("Zed".to_string()),
            ..Default::default()
        };

        assert_eq!(repo.update(UserId::new(9), &changes).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete_reports_affected_rows() {
        let repo = InMemoryUserRepository::new();
        repo.insert(&new_user("Ann", "ann@example.com", None)).await.unwrap();

        assert_eq!(repo.delete(UserId::new(1)).await.unwrap(), 1);
        assert_eq!(repo.delete(UserId::new(1)).await.unwrap(), 0);
    }
}
