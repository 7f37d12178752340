//! # Error Types
//!
//! This module defines error types used throughout the clapper library.
//!
//! The customization core (resolve, theme application, style derivation)
//! is total and never produces these; they come from settings storage,
//! catalog lookups by id, the CLI and the HTTP server.

use thiserror::Error;

/// Main error type for clapper operations
#[derive(Debug, Error)]
pub enum ClapperError {
    /// No industry theme with the given id exists in the catalog
    #[error("Unknown theme: {0}")]
    UnknownTheme(String),

    /// User id unusable as a storage key
    #[error("Invalid user id: {0:?}")]
    InvalidUserId(String),

    /// Settings storage failure (backend unavailable, no signed-in user)
    #[error("Storage error: {0}")]
    Storage(String),

    /// Transport-level errors (listener bind, server loop)
    #[error("Transport error: {0}")]
    Transport(String),

    /// JSON encoding or decoding failure
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
