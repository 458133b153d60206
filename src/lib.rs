//! Users API
//!
//! A small HTTP service exposing create/read/update/delete over a single
//! `users` table, backed by MySQL or by an in-process map.

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::{AppState, UserServiceTrait};
use config::StorageBackend;
use infrastructure::database::ConnectionPool;
use infrastructure::user::{InMemoryUserRepository, MySqlUserRepository, UserService};
use tracing::info;

/// Create the application state for the configured storage backend
pub fn create_app_state(config: &AppConfig) -> anyhow::Result<AppState> {
    info!("Storage backend: {:?}", config.storage.backend);

    let state = match config.storage.backend {
        StorageBackend::Mysql => {
            let pool = ConnectionPool::connect(&config.database)?;
            let repository = Arc::new(MySqlUserRepository::new(pool.clone()));
            let service: Arc<dyn UserServiceTrait> = Arc::new(UserService::new(repository));
            AppState::new(service, Some(pool))
        }
        StorageBackend::Memory => {
            let repository = Arc::new(InMemoryUserRepository::new());
            let service: Arc<dyn UserServiceTrait> = Arc::new(UserService::new(repository));
            AppState::new(service, None)
        }
    };

    Ok(state)
}
