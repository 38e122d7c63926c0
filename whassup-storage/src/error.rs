//! Storage error types.
//!
//! Returned by [`crate::MessageRepository`]; decoding itself never fails.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),
    #[error("Missing table: {0}")]
    MissingTable(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;
