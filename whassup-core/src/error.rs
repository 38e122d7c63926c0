//! Core error types.
//!
//! Decoding never fails; these surface only from explicit I/O checks and unsupported lookups.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum WhassupError {
    #[error("Unsupported operation: {0}")]
    Unsupported(String),

    #[error("Not a regular file: {0}")]
    NotAFile(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, WhassupError>;
