use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by the plumbing around the formatter.
///
/// Formatting itself never fails; these only come from loading translation
/// tables and parsing command line input.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid instant '{0}': expected RFC 3339 or Unix seconds")]
    InvalidInstant(String),

    #[error("Failed to parse string table: {0}")]
    CatalogParse(String),

    #[error("String table not found: {0}")]
    CatalogNotFound(PathBuf),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::CatalogParse(e.to_string())
    }
}

/// Result type alias for fallible operations
pub type Result<T> = std::result::Result<T, Error>;
