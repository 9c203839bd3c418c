//! Blocking HTTP transport over ureq.
//!
//! # Design
//! Executes one `HttpRequest` per call and returns the raw `HttpResponse`.
//! The agent is configured with `http_status_as_error(false)` so 4xx/5xx
//! responses come back as data and status interpretation stays in the
//! parser layer. Anything that prevents a response from arriving — refused
//! connection, DNS failure, broken stream — maps to `ApiError::Transport`.
//!
//! There is deliberately no retry, caching, or cancellation here: one call,
//! one request, one response.

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};

/// Build the agent shared by all calls of a `WorkoutApi`.
pub fn agent() -> ureq::Agent {
    ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent()
}

/// Execute a request and read the full response body as text.
pub fn execute(agent: &ureq::Agent, req: &HttpRequest) -> Result<HttpResponse, ApiError> {
    let path = req.path.as_str();
    let result = match (&req.method, &req.body) {
        (HttpMethod::Get, _) => agent.get(path).call(),
        (HttpMethod::Delete, _) => agent.delete(path).call(),
        (HttpMethod::Post, Some(body)) => agent
            .post(path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Post, None) => agent.post(path).send_empty(),
        (HttpMethod::Put, Some(body)) => agent
            .put(path)
            .content_type("application/json")
            .send(body.as_bytes()),
        (HttpMethod::Put, None) => agent.put(path).send_empty(),
    };

    let mut response = result.map_err(|e| ApiError::Transport(e.to_string()))?;

    let status = response.status().as_u16();
    let body = response
        .body_mut()
        .read_to_string()
        .map_err(|e| ApiError::Transport(e.to_string()))?;

    Ok(HttpResponse {
        status,
        headers: Vec::new(),
        body,
    })
}
