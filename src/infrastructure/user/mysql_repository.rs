//! MySQL user repository implementation

use async_trait::async_trait;
use sqlx::mysql::MySqlRow;
use sqlx::{MySql, QueryBuilder, Row};

use crate::domain::user::{Age, NewUser, User, UserChanges, UserId, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::database::ConnectionPool;

// Column types differ between deployments. The id is widened to BIGINT and
// age to DOUBLE (adding a float literal) so decoding does not depend on the
// table definition and fractional ages survive.
const SELECT_USERS: &str =
    "SELECT CAST(id AS SIGNED) AS id, name, email, (age + 0E0) AS age FROM users";

/// MySQL implementation of UserRepository
#[derive(Debug, Clone)]
pub struct MySqlUserRepository {
    pool: ConnectionPool,
}

impl MySqlUserRepository {
    pub fn new(pool: ConnectionPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn insert(&self, user: &NewUser) -> Result<u64, DomainError> {
        let result = sqlx::query("INSERT INTO users (name, email, age) VALUES (?, ?, ?)")
            .bind(&user.name)
            .bind(&user.email)
            .bind(user.age.map(|age| age.value()))
            .execute(self.pool.pool())
            .await
            .map_err(|e| DomainError::storage(format!("Failed to insert user: {}", e)))?;

        Ok(result.last_insert_id())
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query(SELECT_USERS)
            .fetch_all(self.pool.pool())
            .await
            .map_err(|e| DomainError::storage(format!("Failed to list users: {}", e)))?;

        rows.iter().map(row_to_user).collect()
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(&format!("{} WHERE id = ?", SELECT_USERS))
            .bind(id.value())
            .fetch_optional(self.pool.pool())
            .await
            .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        row.as_ref().map(row_to_user).transpose()
    }

    async fn update(&self, id: UserId, changes: &UserChanges) -> Result<u64, DomainError> {
        let Some(mut builder) = update_statement(id, changes) else {
            return Ok(0);
        };

        let result = builder
            .build()
            .execute(self.pool.pool())
            .await
            .map_err(|e| DomainError::storage(format!("Failed to update user: {}", e)))?;

        Ok(result.rows_affected())
    }

    async fn delete(&self, id: UserId) -> Result<u64, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = ?")
            .bind(id.value())
            .execute(self.pool.pool())
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete user: {}", e)))?;

        Ok(result.rows_affected())
    }
}

/// `UPDATE users SET ... WHERE id = ?` over the columns present in `changes`;
/// `None` when there is nothing to write.
fn update_statement(id: UserId, changes: &UserChanges) -> Option<QueryBuilder<'static, MySql>> {
    if changes.is_empty() {
        return None;
    }

    let mut builder = QueryBuilder::<MySql>::new("UPDATE users SET ");
    let mut assignments = builder.separated(", ");

    if let Some(name) = &changes.name {
        assignments.push("name = ");
        assignments.push_bind_unseparated(name.clone());
    }

    if let Some(email) = &changes.email {
        assignments.push("email = ");
        assignments.push_bind_unseparated(email.clone());
    }

    if let Some(age) = changes.age {
        assignments.push("age = ");
        assignments.push_bind_unseparated(age.map(|age| age.value()));
    }

    builder.push(" WHERE id = ");
    builder.push_bind(id.value());

    Some(builder)
}

fn row_to_user(row: &MySqlRow) -> Result<User, DomainError> {
    let decode = |e: sqlx::Error| DomainError::storage(format!("Invalid user row: {}", e));

    Ok(User {
        id: UserId::new(row.try_get("id").map_err(decode)?),
        name: row.try_get("name").map_err(decode)?,
        email: row.try_get("email").map_err(decode)?,
        age: row
            .try_get::<Option<f64>, _>("age")
            .map_err(decode)?
            .map(Age::new),
    })
}
