//! Error types for sidus-admin.
//!
//! Every fallible operation in the workspace returns [`AdminError`]. Lookups of
//! unknown admins or actions fail with [`AdminError::NotFound`]; configuration
//! that cannot produce a working route fails with
//! [`AdminError::ConfigurationError`] while the registry is being built.

use thiserror::Error;

/// The error type for admin configuration, lookup and route generation.
#[derive(Error, Debug)]
pub enum AdminError {
    /// An admin, action, factory, loader or resolution candidate does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// The configuration cannot be turned into a working admin.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// An error occurred while serializing or deserializing configuration.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// An I/O error occurred.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl AdminError {
    /// Returns the HTTP status code a request handler should answer with.
    ///
    /// - `NotFound` -> 404
    /// - Everything else -> 500
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::ConfigurationError(_) | Self::SerializationError(_) | Self::IoError(_) => 500,
        }
    }

    /// Returns `true` for lookup failures.
    pub const fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }
}

/// A convenience type alias for `Result<T, AdminError>`.
pub type AdminResult<T> = Result<T, AdminError>;
