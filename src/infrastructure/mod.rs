//! Infrastructure layer - Store access, services and logging

pub mod database;
pub mod logging;
pub mod user;
