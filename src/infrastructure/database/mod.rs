//! Relational store plumbing

mod pool;

pub use pool::ConnectionPool;
