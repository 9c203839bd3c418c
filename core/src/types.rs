//! Wire DTOs for the workout API.
//!
//! # Design
//! These types mirror the server's JSON schema exactly; the client performs
//! no validation, defaulting, or normalization beyond optional-field
//! handling. The session-details endpoints use the server's mixed-language
//! field names (`cwiczenie`, `planowaneSerie`, ...), preserved here with
//! explicit serde renames so Rust field names stay readable. The
//! mock-server crate defines its own copies of these shapes; integration
//! tests catch any schema drift between the two crates.

use serde::{Deserialize, Serialize};

/// A reusable workout definition (e.g. "PUSH"), owned by a user.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutTemplate {
    pub id: i64,
    pub name: String,
    pub user_id: i64,
    pub created_at: String,
}

/// One instance of performing a template. A non-null `completed_at` marks
/// the session as finished.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSession {
    pub id: i64,
    pub user_id: i64,
    pub template_id: i64,
    pub template_name: String,
    pub started_at: String,
    pub completed_at: Option<String>,
    pub notes: Option<String>,
}

/// An exercise as scheduled within a session. Completion is inferred by
/// comparing `completed_sets` against `planned_sets`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionExerciseRow {
    pub session_exercise_id: i64,
    #[serde(rename = "cwiczenie")]
    pub exercise_name: String,
    #[serde(rename = "opis", default)]
    pub description: Option<String>,
    #[serde(rename = "planowaneSerie")]
    pub planned_sets: i32,
    #[serde(rename = "wykonaneSerie")]
    pub completed_sets: i32,
    #[serde(rename = "ostatniCiezar")]
    pub last_weight: Option<f64>,
}

/// Aggregate view of an active session: template name, date, and the
/// scheduled exercises.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct WorkoutSessionDetails {
    #[serde(rename = "nazwaSzablonu")]
    pub template_name: String,
    #[serde(rename = "dataTreningu")]
    pub date: String,
    #[serde(rename = "cwiczenia")]
    pub exercises: Vec<SessionExerciseRow>,
}

/// One recorded set (weight × repetitions) for a session-exercise.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ExerciseSet {
    pub id: String,
    pub exercise_id: String,
    pub exercise_name: String,
    pub training_id: String,
    pub order: i32,
    pub repetitions: i32,
    pub weight: f64,
    pub comment: String,
}

/// A set as it appears in the historical session view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SetEntry {
    pub reps: i32,
    pub weight: f64,
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub set_number: Option<i32>,
}

/// An exercise with its recorded sets in the historical session view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SessionExerciseDetails {
    pub exercise_name: String,
    pub sets: Vec<SetEntry>,
}

/// Aggregate historical view of a completed (or ongoing) session.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSessionDetails {
    pub id: i64,
    pub template_name: String,
    pub date: String,
    pub duration: String,
    pub notes: Option<String>,
    pub exercises: Vec<SessionExerciseDetails>,
}

/// Payload for starting a session. The server expects PascalCase keys on
/// this endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartSession {
    #[serde(rename = "UserId")]
    pub user_id: i64,
    #[serde(rename = "TemplateId")]
    pub template_id: i64,
}

/// Payload for finishing a session. PascalCase, like `StartSession`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FinishSession {
    #[serde(rename = "EndSession")]
    pub end_session: bool,
}

/// Payload for recording a new set against a session-exercise.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSet {
    pub session_exercise_id: i64,
    pub set_number: i32,
    pub weight: f64,
    pub reps: i32,
}

/// Payload for creating an exercise and attaching it to a session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSessionExercise {
    pub session_id: i64,
    pub name: String,
    pub description: String,
    pub planned_sets: i32,
}
