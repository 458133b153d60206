//! User infrastructure module
//!
//! MySQL and in-memory repositories for the `users` table, and the service
//! implementing the CRUD operations on top of them.

mod mysql_repository;
mod repository;
mod service;

pub use mysql_repository::MySqlUserRepository;
pub use repository::InMemoryUserRepository;
pub use service::{CreateUserRequest, UpdateUserRequest, UserService};
