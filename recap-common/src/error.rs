//! Common error types for the recap services

use thiserror::Error;

/// Common result type for recap operations
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types across recap services
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration loading or validation error
    #[error("Configuration error: {0}")]
    Config(String),
}
