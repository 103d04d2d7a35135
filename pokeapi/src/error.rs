//! Error types for the PokeAPI client

use thiserror::Error;

/// Errors that can occur when interacting with the PokeAPI service
#[derive(Debug, Error)]
pub enum PokeApiError {
    /// HTTP request failed before a response arrived
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Response body could not be decoded
    #[error("Response parsing failed: {0}")]
    ResponseParseFailed(String),

    /// No pokemon exists under the requested name
    #[error("No pokemon found with name: {0}")]
    NotFound(String),

    /// Service returned an unexpected status
    #[error("API error (status {status}): {message}")]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body from the service
        message: String,
    },
}
