//! Domain models shared by the db and http layers

pub mod pagination;
pub mod todo;

pub use pagination::{Page, PageParams};
pub use todo::{Todo, TodoDraft};
