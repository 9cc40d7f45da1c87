use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TokenError {
    /// The input source is missing or cannot hold text.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    #[error("failed to read {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T, E = TokenError> = std::result::Result<T, E>;
