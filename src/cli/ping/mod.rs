//! Ping command - verifies database connectivity

use tracing::info;

use crate::infrastructure::database::ConnectionPool;

/// Connect with the configured credentials and round-trip `SELECT 1`
pub async fn run() -> anyhow::Result<()> {
    let config = super::bootstrap()?;

    let pool = ConnectionPool::connect(&config.database)?;
    let result = pool.ping().await;
    pool.close().await;

    result?;

    info!(
        host = %config.database.host,
        port = config.database.port,
        database = %config.database.name,
        "Database is reachable"
    );

    Ok(())
}
