//! Error types for the conversion pipeline

use thiserror::Error;

/// Result type alias for conversion operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while converting HTML to PNG
#[derive(Error, Debug)]
pub enum Error {
    /// The input argument could not be resolved to a navigation target
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Failed to launch the browser or open a tab
    #[error("Browser initialization failed: {0}")]
    InitializationError(String),

    /// Failed to navigate to the target
    #[error("Failed to load target: {0}")]
    LoadError(String),

    /// Failed to locate or screenshot the wrapper element
    #[error("Capture failed: {0}")]
    CaptureError(String),

    /// Failed to deliver the PNG bytes to the output sink
    #[error("Failed to write output: {0}")]
    OutputError(String),

    /// The conversion exceeded its wall-clock deadline
    #[error("Generation timed out after {0} seconds")]
    Timeout(u64),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

// The CDP crate reports everything as `anyhow::Error`
impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::CaptureError(err.to_string())
    }
}
