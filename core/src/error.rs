//! Error types for the items API client.
//!
//! # Design
//! One enum covers the whole failure taxonomy: a malformed resource URL is
//! the only synchronous, pre-I/O failure; everything else surfaces after the
//! round trip completes (or fails to). `Transport` is constructed by the
//! host executing the request, not by the core itself, so hosts and parsers
//! report through a single type. No failure is fatal and none may leave the
//! in-memory collection half-mutated.

use std::fmt;

/// Errors returned by `ItemClient` build/parse methods and by hosts
/// executing the requests they build.
#[derive(Debug)]
pub enum ApiError {
    /// The base URL or an item id cannot form a valid resource path.
    /// Raised synchronously, before any network I/O.
    InvalidUrl(String),

    /// The HTTP round trip itself failed (connectivity, DNS, timeout).
    Transport(String),

    /// The server answered, but with an empty body where one was expected.
    MissingBody,

    /// The response body could not be deserialized into the expected shape.
    DeserializationError(String),

    /// The request payload could not be serialized to JSON.
    SerializationError(String),

    /// The server returned 404 — the addressed item does not exist.
    NotFound,

    /// The server returned a non-200 status other than 404.
    HttpError { status: u16, body: String },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::InvalidUrl(msg) => write!(f, "invalid resource URL: {msg}"),
            ApiError::Transport(msg) => write!(f, "transport failure: {msg}"),
            ApiError::MissingBody => write!(f, "response had no body"),
            ApiError::DeserializationError(msg) => {
                write!(f, "deserialization failed: {msg}")
            }
            ApiError::SerializationError(msg) => {
                write!(f, "serialization failed: {msg}")
            }
            ApiError::NotFound => write!(f, "item not found"),
            ApiError::HttpError { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
        }
    }
}

impl std::error::Error for ApiError {}
