//! Error types for the API

use thiserror::Error;

/// Error type for stemming API operations
#[derive(Debug, Error)]
pub enum StemError {
    /// A language name or code that no bundled program answers to
    #[error("Unknown language: {0}")]
    UnknownLanguage(String),
}

/// Result type for stemming API operations
pub type Result<T> = std::result::Result<T, StemError>;
