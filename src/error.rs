//! Error types used by this crate.

use std::io;

use thiserror::Error;

/// Custom error type returned when something goes wrong with scanning for programs.
#[derive(Error, Debug)]
pub enum ScanError {
    /// Error originating from [`io::Error`]
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Error originating from a [`crate::registry::Registry`] backend
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// Error originating from [`serde_json::Error`]
    #[cfg(feature = "serde")]
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A loaded configuration can not be used as-is
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Error type returned by [`crate::registry::Registry`] implementations.
#[derive(Error, Debug)]
pub enum RegistryError {
    #[error("Registry key not found: {0}")]
    KeyNotFound(String),

    #[error("Registry value '{value}' not found under {key}")]
    ValueNotFound { key: String, value: String },

    #[error("Access denied to registry key: {0}")]
    AccessDenied(String),

    #[error("Registry value '{value}' under {key} does not have the requested type")]
    UnexpectedType { key: String, value: String },

    #[error("The system registry is not available on this platform")]
    Unsupported,

    /// Any other error reported by the operating system
    #[error(transparent)]
    Io(#[from] io::Error),
}

pub type RegistryResult<T> = Result<T, RegistryError>;
