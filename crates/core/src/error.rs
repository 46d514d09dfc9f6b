use std::io;

/// Errors that can occur during pathway operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// An argument that must be text carried non-Unicode platform data
    #[error("Invalid argument type: {argument} must be text")]
    InvalidArgumentType { argument: &'static str },

    #[error("Working directory unavailable: {0}")]
    WorkingDir(#[from] io::Error),
}

/// Result type alias for pathway operations
pub type Result<T> = std::result::Result<T, Error>;
