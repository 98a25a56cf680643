//! Database layer: connection pool, schema setup, repositories

pub mod pool;
pub mod repos;
pub mod schema;

pub use pool::{create_pool, create_pool_with_url};
pub use repos::{DbError, TodoRepo};
