//! Typed HTTP client for the workout-tracking API.
//!
//! # Overview
//! One blocking HTTP request per logical operation against a fixed base
//! URL: JSON in, JSON out, any 2xx is success, everything else surfaces as
//! a uniform error carrying the status code and raw body text.
//!
//! # Design
//! - `WorkoutClient` is stateless — it holds only `base_url` and splits
//!   each operation into `build_*` (produces a request) and `parse_*`
//!   (consumes a response), so the I/O boundary is explicit and testable.
//! - `transport` executes requests over ureq; `WorkoutApi` combines the
//!   two into single-call methods, one per server capability.
//! - DTOs in `types` mirror the server's JSON schema exactly and are
//!   defined independently from the mock-server crate; integration tests
//!   catch schema drift.
//! - No retries, caching, pagination, or authentication — a failed call is
//!   reported to the caller and that is all.

pub mod api;
pub mod client;
pub mod error;
pub mod http;
pub mod transport;
pub mod types;

pub use api::WorkoutApi;
pub use client::WorkoutClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use types::{
    ExerciseSet, FinishSession, NewSessionExercise, NewSet, SessionExerciseDetails,
    SessionExerciseRow, SetEntry, StartSession, TrainingSession, TrainingSessionDetails,
    WorkoutSessionDetails, WorkoutTemplate,
};
