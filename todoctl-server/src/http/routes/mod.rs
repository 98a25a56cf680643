//! Route handlers organized by resource

pub mod hello;
pub mod todos;
