//! todoctl-server: HTTP CRUD server for todo items
//!
//! Exposes a single `todos` table over five JSON endpoints,
//! backed by a bounded PostgreSQL connection pool.

pub mod config;
pub mod db;
pub mod http;
pub mod models;

pub use config::{DbConfig, ServerConfig};
pub use http::{run_server, AppState};
