//! Error types for the resource client.
//!
//! # Design
//! Three failure kinds never overlap. `Api` means the server answered with a
//! status outside 200/201/202/204 and carries the body verbatim.
//! `Serialization` means a payload did not match the expected type.
//! `Transport` is whatever the transport reported, passed through untouched.

use std::time::Duration;

use thiserror::Error;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The server answered with a non-success status.
///
/// Displays as the raw response body, byte for byte.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{body}")]
pub struct ApiError {
    pub status: u16,
    pub body: String,
}

/// Failures raised by a [`Transport`](crate::transport::Transport).
#[derive(Debug, Error)]
pub enum TransportError {
    /// The round trip did not finish within the configured timeout.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    /// The connection could not be established or was dropped.
    #[error("connection error: {0}")]
    Connection(String),

    /// The target URL could not be parsed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Any other failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The response body could not be read as text.
    #[error("failed to read response body: {0}")]
    Body(String),
}

/// Errors returned by [`ResourceClient`](crate::ResourceClient) operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A payload could not be encoded, or a success body could not be decoded.
    #[error("serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl Error {
    pub fn is_api(&self) -> bool {
        matches!(self, Self::Api(_))
    }

    pub fn is_timeout(&self) -> bool {
        match self {
            Self::Transport(TransportError::Timeout(_)) => true,
            Self::Transport(TransportError::Http(e)) => e.is_timeout(),
            _ => false,
        }
    }

    /// Status code of a server-returned error.
    pub fn status_code(&self) -> Option<u16> {
        match self {
            Self::Api(e) => Some(e.status),
            _ => None,
        }
    }

    /// Raw body of a server-returned error.
    pub fn api_body(&self) -> Option<&str> {
        match self {
            Self::Api(e) => Some(&e.body),
            _ => None,
        }
    }
}
