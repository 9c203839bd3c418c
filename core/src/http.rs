//! HTTP request/response types used between the builder, transport, and
//! parser layers.
//!
//! # Design
//! These types describe HTTP exchanges as plain data. `WorkoutClient` builds
//! `HttpRequest` values and consumes `HttpResponse` values without ever
//! touching the network; the transport layer is the only place that does
//! I/O. This separation keeps request building and status/body handling
//! deterministic and unit-testable without a socket.
//!
//! All fields use owned types (`String`, `Vec`) so values can be moved
//! freely between layers.

/// HTTP method for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// An HTTP request described as plain data.
///
/// Built by `WorkoutClient::build_*` methods and executed by
/// `transport::execute`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

/// An HTTP response described as plain data.
///
/// Produced by the transport after executing an `HttpRequest`, then passed
/// to `WorkoutClient::parse_*` methods for status checking and
/// deserialization.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    /// Whether the status is in the 2xx success range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}
