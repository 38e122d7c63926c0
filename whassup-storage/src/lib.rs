//! Storage crate: read-only access to WhatsApp `msgstore.db`.
//!
//! ## Modules
//!
//! - [`error`] – Storage error types
//! - [`models`] – ChatSummary
//! - [`sqlite_row`] – rusqlite adapter for `whassup_core::RowSource`
//! - [`message_repo`] – MessageRepository

mod error;
mod message_repo;
mod models;
mod sqlite_row;


pub use error::{Result, StorageError};
pub use message_repo::MessageRepository;
pub use models::ChatSummary;
pub use sqlite_row::SqliteRow;
