//! Error types for Nichecraft

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// A required request field was missing or empty
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// A progress stream ended before its terminal product event
    #[error("Generation incomplete: {0}")]
    Incomplete(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation(_))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
