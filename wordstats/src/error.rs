// src/error.rs
use std::io;
use std::path::PathBuf;

/// Reasons word statistics could not be produced for a document.
#[derive(Debug, thiserror::Error)]
pub enum StatsError {
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Source not found or unreadable: {}", path.display())]
    SourceNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read input: {0}")]
    Unreadable(#[from] io::Error),

    #[error("Document contains no words")]
    EmptyDocument,
}

pub type Result<T> = std::result::Result<T, StatsError>;
