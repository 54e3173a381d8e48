//! Error types for blog-toc operations.

use thiserror::Error;

/// Errors that can occur while reading article payloads or extracting a TOC.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Missing required element: {0}")]
    MissingElement(String),

    #[error("HTML parsing failed: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, Error>;
