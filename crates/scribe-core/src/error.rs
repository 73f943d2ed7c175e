use std::path::PathBuf;

use thiserror::Error;

/// Errors produced while assembling or serializing versioned documents.
#[derive(Error, Debug)]
pub enum DocsError {
    /// Invalid registration: duplicate version label, empty registry, etc.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A documentation source file or directory could not be read.
    #[error("Failed to read documentation source {}: {source}", path.display())]
    Source {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A lookup referenced a version label that was never registered.
    #[error("Unknown version label: {0}")]
    UnknownVersion(String),

    /// Document serialization failed.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl DocsError {
    /// Shorthand for a [`DocsError::Config`] with a formatted message.
    pub fn config(message: impl Into<String>) -> Self {
        DocsError::Config(message.into())
    }
}

pub type Result<T> = std::result::Result<T, DocsError>;
