//! Error types for verident

use thiserror::Error;

/// Result type alias for verident operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for verident
///
/// Classified authentication outcomes never travel here — they are data,
/// carried by [`AuthenticationResult`](crate::AuthenticationResult). Only
/// collaborator faults and serialization failures surface as errors, and
/// adapters propagate them to the caller unmodified.
#[derive(Error, Debug)]
pub enum Error {
    /// Data source failed to execute the lookup
    #[error("Data source error: {0}")]
    DataSource(String),

    /// Directory service failed to complete the external authentication call
    #[error("Directory service error: {0}")]
    Directory(String),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
