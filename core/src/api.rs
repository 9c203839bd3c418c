//! High-level API surface: one blocking method per server capability.
//!
//! # Design
//! `WorkoutApi` combines the stateless `WorkoutClient` with a ureq agent
//! and runs the full build → execute → parse cycle for each operation. The
//! methods are pure wrappers: fixed verb, path, and payload shape, no
//! branching. Every failure is written to the diagnostic log with the
//! method and URL before it propagates; nothing is retried or recovered
//! here — the caller decides what to do with a failed operation.

use crate::client::WorkoutClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport;
use crate::types::{
    ExerciseSet, NewSessionExercise, NewSet, StartSession, TrainingSession,
    TrainingSessionDetails, WorkoutSessionDetails, WorkoutTemplate,
};

/// Blocking client for the workout API, bound to one base URL.
pub struct WorkoutApi {
    client: WorkoutClient,
    agent: ureq::Agent,
}

impl WorkoutApi {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: WorkoutClient::new(base_url),
            agent: transport::agent(),
        }
    }

    /// Execute a built request and parse it, logging any failure first.
    fn run<T>(
        &self,
        req: HttpRequest,
        parse: impl FnOnce(HttpResponse) -> Result<T, ApiError>,
    ) -> Result<T, ApiError> {
        let method = req.method.as_str();
        let path = req.path.clone();
        let result = transport::execute(&self.agent, &req).and_then(parse);
        if let Err(err) = &result {
            log::error!("api request failed: {method} {path}: {err}");
        }
        result
    }

    // --- ExerciseSets ---

    pub fn sets_for_session_exercise(
        &self,
        session_exercise_id: i64,
    ) -> Result<Vec<ExerciseSet>, ApiError> {
        let req = self.client.build_sets_for_session_exercise(session_exercise_id);
        self.run(req, |r| self.client.parse_sets_for_session_exercise(r))
    }

    pub fn set_by_id(&self, set_id: &str) -> Result<ExerciseSet, ApiError> {
        let req = self.client.build_set_by_id(set_id);
        self.run(req, |r| self.client.parse_set_by_id(r))
    }

    /// Returns the id of the newly recorded set.
    pub fn add_set(&self, input: &NewSet) -> Result<i64, ApiError> {
        let req = self.client.build_add_set(input)?;
        self.run(req, |r| self.client.parse_add_set(r))
    }

    // --- WorkoutTemplates ---

    pub fn workout_templates(&self) -> Result<Vec<WorkoutTemplate>, ApiError> {
        let req = self.client.build_workout_templates();
        self.run(req, |r| self.client.parse_workout_templates(r))
    }

    // --- TrainingSessions ---

    /// Returns the id of the newly started session.
    pub fn start_session(&self, user_id: i64, template_id: i64) -> Result<i64, ApiError> {
        let input = StartSession {
            user_id,
            template_id,
        };
        let req = self.client.build_start_session(&input)?;
        self.run(req, |r| self.client.parse_start_session(r))
    }

    pub fn workout_session_details(
        &self,
        session_id: i64,
        template_id: i64,
    ) -> Result<WorkoutSessionDetails, ApiError> {
        let req = self.client.build_workout_session_details(session_id, template_id);
        self.run(req, |r| self.client.parse_workout_session_details(r))
    }

    pub fn finish_session(&self, session_id: i64) -> Result<(), ApiError> {
        let req = self.client.build_finish_session(session_id)?;
        self.run(req, |r| self.client.parse_finish_session(r))
    }

    pub fn training_sessions(&self, user_id: i64) -> Result<Vec<TrainingSession>, ApiError> {
        let req = self.client.build_training_sessions(user_id);
        self.run(req, |r| self.client.parse_training_sessions(r))
    }

    pub fn session_details(&self, session_id: i64) -> Result<TrainingSessionDetails, ApiError> {
        let req = self.client.build_session_details(session_id);
        self.run(req, |r| self.client.parse_session_details(r))
    }

    // --- SessionExercises ---

    /// Returns the id of the newly created session-exercise.
    pub fn create_session_exercise(&self, input: &NewSessionExercise) -> Result<i64, ApiError> {
        let req = self.client.build_create_session_exercise(input)?;
        self.run(req, |r| self.client.parse_create_session_exercise(r))
    }

    pub fn remove_session_exercise(&self, session_exercise_id: i64) -> Result<(), ApiError> {
        let req = self.client.build_remove_session_exercise(session_exercise_id);
        self.run(req, |r| self.client.parse_remove_session_exercise(r))
    }
}
