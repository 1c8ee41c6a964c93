/// Error types for the maritime map library
use thiserror::Error;

/// Main error type for fetch and map-layer operations
#[derive(Error, Debug)]
pub enum Error {
    /// The API answered with a non-OK status
    #[error("API responded with HTTP {0}")]
    HttpStatus(u16),

    /// The request never produced a response
    #[error("HTTP request failed: {0}")]
    Transport(String),

    /// Response body was not the expected JSON
    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),

    /// A map layer could not be added or removed
    #[error("Map layer operation failed: {0}")]
    Layer(String),

    /// Date parsing failed
    #[error("Failed to parse date: {0}")]
    InvalidDate(String),
}

/// Type alias for Results using the map Error
pub type Result<T> = std::result::Result<T, Error>;
