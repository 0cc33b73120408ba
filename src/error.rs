//! Error types for the toolbox.

use thiserror::Error;

/// Result type alias for toolbox operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while running a demonstration.
#[derive(Error, Debug)]
pub enum Error {
    /// User input could not be turned into a value
    #[error("Invalid input: {0}")]
    Input(#[from] InputError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

/// Reasons a line of user input was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("empty input")]
    Empty,

    #[error("no integers found in the list")]
    NoIntegers,

    #[error("'{0}' is not an integer")]
    NotAnInteger(String),

    #[error("{0} is negative")]
    Negative(i64),

    #[error("{value} is larger than the allowed maximum of {max}")]
    TooLarge { value: u32, max: u32 },
}
