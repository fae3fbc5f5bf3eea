//! ALFA PassGen - Error Types

use thiserror::Error;

/// Result type for password generation operations
pub type PassGenResult<T> = Result<T, PassGenError>;

/// Password generation error types
#[derive(Error, Debug)]
pub enum PassGenError {
    #[error("Password length {requested} out of range ({min}-{max})")]
    LengthOutOfRange {
        requested: usize,
        min: usize,
        max: usize,
    },

    #[error("Parameter must not be empty")]
    EmptyParameter,

    #[error("Master secret must not be empty")]
    EmptySecret,

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
