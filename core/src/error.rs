//! Error types for the workout API client.
//!
//! # Design
//! One flat enum covers the whole taxonomy: transport failures, non-2xx
//! responses, and serialization problems. `HttpStatus` carries the numeric
//! status and the raw response body as structured fields so callers can
//! inspect them without parsing a formatted message; `Display` still embeds
//! both for diagnostics.

use std::fmt;

/// Errors returned by `WorkoutClient` and `WorkoutApi`.
#[derive(Debug)]
pub enum ApiError {
    /// The request could not be sent or no response was received.
    Transport(String),

    /// The server answered with a status outside the 2xx range. `body` is
    /// the raw response body text, unparsed.
    HttpStatus { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    Decode(String),

    /// The request payload could not be serialized to JSON.
    Encode(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Transport(msg) => write!(f, "transport error: {msg}"),
            ApiError::HttpStatus { status, body } => {
                write!(f, "HTTP {status}: {body}")
            }
            ApiError::Decode(msg) => write!(f, "decode failed: {msg}"),
            ApiError::Encode(msg) => write!(f, "encode failed: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}
