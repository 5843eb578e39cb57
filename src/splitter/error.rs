use thiserror::Error;

/// Rejected chunking configuration. Raised before any text is touched.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Chunk size must be greater than zero")]
    InvalidChunkSize,

    #[error("Chunk overlap {overlap} must be smaller than chunk size {size}")]
    OverlapTooLarge { overlap: usize, size: usize },

    #[error("Separator list is empty")]
    EmptySeparators,

    #[error("Separator list must end with the empty string, found {0:?}")]
    MissingTerminalSeparator(String),
}
