//! Error types for the climate-api application.
//!
//! This module defines a single error enum that covers every failure the
//! server can run into, from startup configuration to per-request queries.

use thiserror::Error;

/// The main error type for climate-api operations.
#[derive(Error, Debug)]
pub enum ClimateError {
    /// The backing store could not be opened or reached
    #[error("Connection error: {message}")]
    Connection { message: String },

    /// Query errors reported by the store
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// A date read from the store could not be interpreted
    #[error("Invalid date: {value} - {message}")]
    InvalidDate { value: String, message: String },

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server errors
    #[error("Server error: {message}")]
    Server { message: String },
}

/// Convenience type alias for Results with ClimateError
pub type Result<T> = std::result::Result<T, ClimateError>;
