//! Unified error types for Gridpool

use thiserror::Error;

/// Unified Result type
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for Gridpool
#[derive(Error, Debug)]
pub enum Error {
    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Malformed hub endpoint URL
    #[error("Invalid hub URL '{url}': {source}")]
    InvalidHubUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// Remote endpoint unreachable
    #[error("Connection error: {0}")]
    Connection(String),

    /// Session construction or teardown failure
    #[error("Session error: {0}")]
    Session(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error
    pub fn configuration<S: Into<String>>(msg: S) -> Self {
        Error::Configuration(msg.into())
    }

    /// Create a new connection error
    pub fn connection<S: Into<String>>(msg: S) -> Self {
        Error::Connection(msg.into())
    }

    /// Create a new session error
    pub fn session<S: Into<String>>(msg: S) -> Self {
        Error::Session(msg.into())
    }

    /// Create a new internal error
    pub fn internal<S: Into<String>>(msg: S) -> Self {
        Error::Internal(msg.into())
    }
}
