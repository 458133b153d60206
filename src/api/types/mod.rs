//! Request/response plumbing shared by the handlers

pub mod error;
pub mod json;

pub use error::ApiError;
pub use json::Json;
