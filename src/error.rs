//! Error types for the TastyPair library.
//!
//! All fallible operations return [`Result`], whose error type is
//! [`TastyPairError`]. The aggregation core itself never fails; errors come
//! from loading input, reading configuration, building analyzers and writing
//! output.
//!
//! # Examples
//!
//! ```
//! use tastypair::error::{Result, TastyPairError};
//!
//! fn example_operation() -> Result<()> {
//!     Err(TastyPairError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use thiserror::Error;

/// The main error type for TastyPair operations.
#[derive(Error, Debug)]
pub enum TastyPairError {
    /// I/O errors (reading menus, writing snapshots)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Analysis-related errors (invalid patterns, tokenizer setup)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Malformed input documents
    #[error("Input error: {0}")]
    Input(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with TastyPairError.
pub type Result<T> = std::result::Result<T, TastyPairError>;

impl TastyPairError {
    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        TastyPairError::Analysis(msg.into())
    }

    /// Create a new input error.
    pub fn input<S: Into<String>>(msg: S) -> Self {
        TastyPairError::Input(msg.into())
    }

    /// Create a new configuration error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        TastyPairError::Config(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        TastyPairError::InvalidArgument(msg.into())
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        TastyPairError::Other(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_construction() {
        let error = TastyPairError::analysis("bad pattern");
        assert_eq!(error.to_string(), "Analysis error: bad pattern");

        let error = TastyPairError::input("not an array");
        assert_eq!(error.to_string(), "Input error: not an array");

        let error = TastyPairError::config("shard_size must be positive");
        assert_eq!(
            error.to_string(),
            "Configuration error: shard_size must be positive"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let error = TastyPairError::from(io_error);

        match error {
            TastyPairError::Io(_) => {}
            _ => panic!("Expected IO error variant"),
        }
    }

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<Vec<u32>>("{").unwrap_err();
        let error = TastyPairError::from(json_error);
        assert!(error.to_string().starts_with("JSON error:"));
    }
}
