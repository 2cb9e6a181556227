use std::path::PathBuf;
use thiserror::Error;

/// Main error type for unscramble operations
#[derive(Error, Debug)]
pub enum UnscrambleError {
    #[error("Word list not found: {}", .0.display())]
    WordlistNotFound(PathBuf),

    #[error("Failed to parse word list: {0}")]
    WordlistParse(#[from] serde_json::Error),

    #[error("Word list is empty")]
    WordlistEmpty,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for unscramble operations
pub type Result<T> = std::result::Result<T, UnscrambleError>;

impl UnscrambleError {
    /// Check if this error comes from loading the word source.
    ///
    /// Load errors are fatal at startup: the process must refuse to serve
    /// queries rather than run with a missing or empty index.
    pub fn is_load_error(&self) -> bool {
        matches!(
            self,
            UnscrambleError::WordlistNotFound(_)
                | UnscrambleError::WordlistParse(_)
                | UnscrambleError::WordlistEmpty
                | UnscrambleError::Io(_)
        )
    }
}
