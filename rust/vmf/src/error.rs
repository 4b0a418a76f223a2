use thiserror::Error;

/// Result type for map emission
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while writing a map document
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to write map document: {0}")]
    Io(#[from] std::io::Error),
}
