//! MySQL connection pool

use std::time::Duration;

use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};
use tracing::info;

use crate::config::DatabaseConfig;
use crate::domain::DomainError;

/// Bounded set of reusable connections to the relational store.
///
/// Cloning is cheap and shares the same underlying pool. Callers beyond
/// `max_connections` queue inside sqlx until a connection frees up or the
/// acquire timeout elapses.
#[derive(Debug, Clone)]
pub struct ConnectionPool {
    pool: MySqlPool,
}

impl ConnectionPool {
    /// Build the pool. Connections are opened on first use, so an unreachable
    /// store surfaces on the first statement rather than at startup.
    pub fn connect(config: &DatabaseConfig) -> Result<Self, DomainError> {
        if config.max_connections == 0 {
            return Err(DomainError::internal("database.max_connections must be at least 1"));
        }

        let options = MySqlConnectOptions::new()
            .host(&config.host)
            .port(config.port)
            .username(&config.user)
            .password(&config.password)
            .database(&config.name);

        let pool = MySqlPoolOptions::new()
            .max_connections(config.max_connections)
            .min_connections(0)
            .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
            .connect_lazy_with(options);

        info!(
            host = %config.host,
            port = config.port,
            database = %config.name,
            max_connections = config.max_connections,
            "MySQL connection pool configured"
        );

        Ok(Self { pool })
    }

    /// Returns a reference to the connection pool
    pub fn pool(&self) -> &MySqlPool {
        &self.pool
    }

    /// Round-trip a trivial statement
    pub async fn ping(&self) -> Result<(), DomainError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Database ping failed: {}", e)))?;

        Ok(())
    }

    /// Close every connection; pending acquires fail afterwards
    pub async fn close(&self) {
        self.pool.close().await;
        info!("MySQL connection pool closed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connect_rejects_empty_pool() {
        let config = DatabaseConfig {
            max_connections: 0,
            ..DatabaseConfig::default()
        };

        let err = ConnectionPool::connect(&config).unwrap_err();
        assert!(matches!(err, DomainError::Internal { .. }));
    }

    #[tokio::test]
    async fn test_ping_unreachable_is_storage_error() {
        let config = DatabaseConfig {
            host: "127.0.0.1".to_string(),
            port: 1,
            acquire_timeout_secs: 1,
            ..DatabaseConfig::default()
        };
        let pool = ConnectionPool::connect(&config).unwrap();

        let err = pool.ping().await.unwrap_err();
        assert!(matches!(err, DomainError::Storage { .. }));

        pool.close().await;
    }
}
