//! Repository implementations for database access
//!
//! Each operation is a single parameterized statement; no handler
//! issues more than one, so no transactions are needed.

pub mod todos;

pub use todos::{DbError, TodoRepo};
