//! Error types for `PokeAPI` fetching.

use pokedex_types::EntryId;

/// Errors that can occur while fetching from `PokeAPI`.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// The HTTP client could not be constructed.
    #[error("HTTP client setup failed: {0}")]
    Client(String),

    /// The request never produced a response (connect, timeout, TLS).
    #[error("request to {url} failed: {message}")]
    Http {
        /// Requested URL.
        url: String,
        /// Underlying transport error.
        message: String,
    },

    /// The server answered with a non-success status.
    #[error("{url} returned {status}")]
    Status {
        /// Requested URL.
        url: String,
        /// HTTP status code.
        status: u16,
    },

    /// The response body was not the expected JSON shape.
    #[error("response from {url} could not be decoded: {message}")]
    Decode {
        /// Requested URL.
        url: String,
        /// Underlying decode error.
        message: String,
    },

    /// The primary record for a detail page could not be fetched.
    #[error("entry {0} not found")]
    NotFound(EntryId),
}
