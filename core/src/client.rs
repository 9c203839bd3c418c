//! Stateless request builder and response parser for the workout API.
//!
//! # Design
//! `WorkoutClient` holds only a `base_url` and carries no mutable state
//! between calls. Each operation is split into a `build_*` method that
//! produces an `HttpRequest` and a `parse_*` method that consumes an
//! `HttpResponse`; `transport::execute` sits between the two. None of the
//! per-operation methods contains branching logic — they only supply the
//! fixed verb, path, and payload shape.
//!
//! Success is any 2xx status. A 204 or empty body on a successful response
//! yields the result type's default value (empty list for list results,
//! zero for id results); void operations skip parsing entirely.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{
    ExerciseSet, FinishSession, NewSessionExercise, NewSet, StartSession, TrainingSession,
    TrainingSessionDetails, WorkoutSessionDetails, WorkoutTemplate,
};

/// Synchronous, stateless client for the workout API.
///
/// Builds `HttpRequest` values and parses `HttpResponse` values without
/// touching the network. `WorkoutApi` combines this with the ureq transport
/// for single-call operations.
#[derive(Debug, Clone)]
pub struct WorkoutClient {
    base_url: String,
}

impl WorkoutClient {
    /// The base URL is explicit configuration; it is fixed for the lifetime
    /// of the client.
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn get(&self, endpoint: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/{endpoint}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    fn delete(&self, endpoint: String) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Delete,
            path: format!("{}/{endpoint}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    /// Build a POST or PUT carrying a JSON payload. The content-type header
    /// is attached only here — requests without a payload send no header.
    fn json_request<T: Serialize>(
        &self,
        method: HttpMethod,
        endpoint: String,
        payload: &T,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(payload).map_err(|e| ApiError::Encode(e.to_string()))?;
        Ok(HttpRequest {
            method,
            path: format!("{}/{endpoint}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    // --- ExerciseSets ---

    pub fn build_sets_for_session_exercise(&self, session_exercise_id: i64) -> HttpRequest {
        self.get(format!("ExerciseSets/sessionExercise/{session_exercise_id}"))
    }

    pub fn parse_sets_for_session_exercise(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<ExerciseSet>, ApiError> {
        parse_json(response)
    }

    pub fn build_set_by_id(&self, set_id: &str) -> HttpRequest {
        self.get(format!("ExerciseSets/{set_id}"))
    }

    pub fn parse_set_by_id(&self, response: HttpResponse) -> Result<ExerciseSet, ApiError> {
        parse_json(response)
    }

    pub fn build_add_set(&self, input: &NewSet) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, "ExerciseSets".to_string(), input)
    }

    pub fn parse_add_set(&self, response: HttpResponse) -> Result<i64, ApiError> {
        parse_json(response)
    }

    // --- WorkoutTemplates ---

    pub fn build_workout_templates(&self) -> HttpRequest {
        self.get("WorkoutTemplates".to_string())
    }

    pub fn parse_workout_templates(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<WorkoutTemplate>, ApiError> {
        parse_json(response)
    }

    // --- TrainingSessions ---

    pub fn build_start_session(&self, input: &StartSession) -> Result<HttpRequest, ApiError> {
        self.json_request(HttpMethod::Post, "TrainingSessions".to_string(), input)
    }

    /// The server replies with the new session id as a bare JSON number.
    pub fn parse_start_session(&self, response: HttpResponse) -> Result<i64, ApiError> {
        parse_json(response)
    }

    pub fn build_workout_session_details(&self, session_id: i64, template_id: i64) -> HttpRequest {
        self.get(format!("TrainingSessions/{session_id}/details/{template_id}"))
    }

    pub fn parse_workout_session_details(
        &self,
        response: HttpResponse,
    ) -> Result<WorkoutSessionDetails, ApiError> {
        parse_json(response)
    }

    pub fn build_finish_session(&self, session_id: i64) -> Result<HttpRequest, ApiError> {
        self.json_request(
            HttpMethod::Put,
            format!("TrainingSessions/{session_id}"),
            &FinishSession { end_session: true },
        )
    }

    pub fn parse_finish_session(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_success(&response)
    }

    pub fn build_training_sessions(&self, user_id: i64) -> HttpRequest {
        self.get(format!("TrainingSessions/user/{user_id}"))
    }

    pub fn parse_training_sessions(
        &self,
        response: HttpResponse,
    ) -> Result<Vec<TrainingSession>, ApiError> {
        parse_json(response)
    }

    pub fn build_session_details(&self, session_id: i64) -> HttpRequest {
        self.get(format!("TrainingSessions/{session_id}/details"))
    }

    pub fn parse_session_details(
        &self,
        response: HttpResponse,
    ) -> Result<TrainingSessionDetails, ApiError> {
        parse_json(response)
    }

    // --- SessionExercises ---

    pub fn build_create_session_exercise(
        &self,
        input: &NewSessionExercise,
    ) -> Result<HttpRequest, ApiError> {
        self.json_request(
            HttpMethod::Post,
            "SessionExercises/create-new".to_string(),
            input,
        )
    }

    pub fn parse_create_session_exercise(&self, response: HttpResponse) -> Result<i64, ApiError> {
        parse_json(response)
    }

    pub fn build_remove_session_exercise(&self, session_exercise_id: i64) -> HttpRequest {
        self.delete(format!("SessionExercises/{session_exercise_id}"))
    }

    pub fn parse_remove_session_exercise(&self, response: HttpResponse) -> Result<(), ApiError> {
        check_success(&response)
    }
}

/// Fail with the raw status and body when the response is outside 2xx.
fn check_success(response: &HttpResponse) -> Result<(), ApiError> {
    if response.is_success() {
        return Ok(());
    }
    Err(ApiError::HttpStatus {
        status: response.status,
        body: response.body.clone(),
    })
}

/// Shared parse path for typed results. A 204 or empty body on a successful
/// response yields `T::default()` rather than a decode error.
fn parse_json<T: DeserializeOwned + Default>(response: HttpResponse) -> Result<T, ApiError> {
    check_success(&response)?;
    if response.status == 204 || response.body.is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
}
