//! In-memory implementation of the workout API for tests.
//!
//! Serves the same routes and wire schema as the real backend: numeric ids,
//! PascalCase payloads on the TrainingSessions endpoints, and the
//! mixed-language field names in the session-details responses. The store
//! starts with three seeded templates for user 1 since the client has no
//! template-creation operation. DTOs are defined independently from the
//! core crate; integration tests catch schema drift.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::{net::TcpListener, sync::RwLock};

// Fixed timestamps keep responses deterministic for assertions.
const CREATED_AT: &str = "2024-01-01";
const STARTED_AT: &str = "2024-03-05T10:00:00Z";
const COMPLETED_AT: &str = "2024-03-05T11:00:00Z";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutTemplate {
    pub id: i64,
    pub name: String,
    pub user_id: i64,
    pub created_at: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
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

#[derive(Clone, Debug)]
pub struct SessionExercise {
    pub id: i64,
    pub session_id: i64,
    pub name: String,
    pub description: String,
    pub planned_sets: i32,
}

#[derive(Clone, Debug)]
pub struct RecordedSet {
    pub id: i64,
    pub session_exercise_id: i64,
    pub set_number: i32,
    pub weight: f64,
    pub reps: i32,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionExerciseRow {
    pub session_exercise_id: i64,
    #[serde(rename = "cwiczenie")]
    pub exercise_name: String,
    #[serde(rename = "opis")]
    pub description: Option<String>,
    #[serde(rename = "planowaneSerie")]
    pub planned_sets: i32,
    #[serde(rename = "wykonaneSerie")]
    pub completed_sets: i32,
    #[serde(rename = "ostatniCiezar")]
    pub last_weight: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct WorkoutSessionDetails {
    #[serde(rename = "nazwaSzablonu")]
    pub template_name: String,
    #[serde(rename = "dataTreningu")]
    pub date: String,
    #[serde(rename = "cwiczenia")]
    pub exercises: Vec<SessionExerciseRow>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
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

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SetEntry {
    pub reps: i32,
    pub weight: f64,
    pub id: Option<i64>,
    pub set_number: Option<i32>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionExerciseDetails {
    pub exercise_name: String,
    pub sets: Vec<SetEntry>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrainingSessionDetails {
    pub id: i64,
    pub template_name: String,
    pub date: String,
    pub duration: String,
    pub notes: Option<String>,
    pub exercises: Vec<SessionExerciseDetails>,
}

#[derive(Debug, Deserialize)]
pub struct StartSessionRequest {
    #[serde(rename = "UserId")]
    pub user_id: i64,
    #[serde(rename = "TemplateId")]
    pub template_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct FinishSessionRequest {
    #[serde(rename = "EndSession")]
    pub end_session: bool,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSetRequest {
    pub session_exercise_id: i64,
    pub set_number: i32,
    pub weight: f64,
    pub reps: i32,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSessionExerciseRequest {
    pub session_id: i64,
    pub name: String,
    pub description: String,
    pub planned_sets: i32,
}

#[derive(Debug)]
pub struct Store {
    next_id: i64,
    templates: Vec<WorkoutTemplate>,
    sessions: HashMap<i64, TrainingSession>,
    exercises: HashMap<i64, SessionExercise>,
    sets: HashMap<i64, RecordedSet>,
}

impl Store {
    fn seeded() -> Self {
        let templates = ["PUSH", "PULL", "LEGS"]
            .iter()
            .enumerate()
            .map(|(i, name)| WorkoutTemplate {
                id: i as i64 + 1,
                name: (*name).to_string(),
                user_id: 1,
                created_at: CREATED_AT.to_string(),
            })
            .collect();
        Self {
            next_id: 100,
            templates,
            sessions: HashMap::new(),
            exercises: HashMap::new(),
            sets: HashMap::new(),
        }
    }

    fn alloc_id(&mut self) -> i64 {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn sets_for_exercise(&self, session_exercise_id: i64) -> Vec<&RecordedSet> {
        let mut sets: Vec<&RecordedSet> = self
            .sets
            .values()
            .filter(|s| s.session_exercise_id == session_exercise_id)
            .collect();
        sets.sort_by_key(|s| s.set_number);
        sets
    }

    fn exercise_rows(&self, session_id: i64) -> Vec<SessionExerciseRow> {
        let mut exercises: Vec<&SessionExercise> = self
            .exercises
            .values()
            .filter(|e| e.session_id == session_id)
            .collect();
        exercises.sort_by_key(|e| e.id);
        exercises
            .into_iter()
            .map(|e| {
                let sets = self.sets_for_exercise(e.id);
                SessionExerciseRow {
                    session_exercise_id: e.id,
                    exercise_name: e.name.clone(),
                    description: Some(e.description.clone()),
                    planned_sets: e.planned_sets,
                    completed_sets: sets.len() as i32,
                    last_weight: sets.last().map(|s| s.weight),
                }
            })
            .collect()
    }
}

pub type Db = Arc<RwLock<Store>>;

pub fn app() -> Router {
    let db: Db = Arc::new(RwLock::new(Store::seeded()));
    Router::new()
        .route("/WorkoutTemplates", get(list_templates))
        .route("/TrainingSessions", post(start_session))
        .route("/TrainingSessions/{id}", put(finish_session))
        .route("/TrainingSessions/user/{user_id}", get(user_sessions))
        .route("/TrainingSessions/{id}/details", get(session_history))
        .route(
            "/TrainingSessions/{id}/details/{template_id}",
            get(session_details),
        )
        .route("/ExerciseSets", post(add_set))
        .route("/ExerciseSets/{id}", get(get_set))
        .route(
            "/ExerciseSets/sessionExercise/{id}",
            get(sets_for_session_exercise),
        )
        .route("/SessionExercises/create-new", post(create_session_exercise))
        .route("/SessionExercises/{id}", delete(remove_session_exercise))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn list_templates(State(db): State<Db>) -> Json<Vec<WorkoutTemplate>> {
    let store = db.read().await;
    Json(store.templates.clone())
}

async fn start_session(
    State(db): State<Db>,
    Json(input): Json<StartSessionRequest>,
) -> Result<(StatusCode, Json<i64>), (StatusCode, &'static str)> {
    let mut store = db.write().await;
    let template = store
        .templates
        .iter()
        .find(|t| t.id == input.template_id)
        .cloned()
        .ok_or((StatusCode::NOT_FOUND, "Template not found"))?;
    let id = store.alloc_id();
    store.sessions.insert(
        id,
        TrainingSession {
            id,
            user_id: input.user_id,
            template_id: template.id,
            template_name: template.name,
            started_at: STARTED_AT.to_string(),
            completed_at: None,
            notes: None,
        },
    );
    Ok((StatusCode::CREATED, Json(id)))
}

async fn finish_session(
    State(db): State<Db>,
    Path(id): Path<i64>,
    Json(input): Json<FinishSessionRequest>,
) -> Result<StatusCode, (StatusCode, &'static str)> {
    let mut store = db.write().await;
    let session = store
        .sessions
        .get_mut(&id)
        .ok_or((StatusCode::NOT_FOUND, "Session not found"))?;
    if input.end_session {
        session.completed_at = Some(COMPLETED_AT.to_string());
    }
    Ok(StatusCode::NO_CONTENT)
}

async fn user_sessions(
    State(db): State<Db>,
    Path(user_id): Path<i64>,
) -> Json<Vec<TrainingSession>> {
    let store = db.read().await;
    let mut sessions: Vec<TrainingSession> = store
        .sessions
        .values()
        .filter(|s| s.user_id == user_id)
        .cloned()
        .collect();
    sessions.sort_by_key(|s| s.id);
    Json(sessions)
}

async fn session_details(
    State(db): State<Db>,
    Path((id, _template_id)): Path<(i64, i64)>,
) -> Result<Json<WorkoutSessionDetails>, (StatusCode, &'static str)> {
    let store = db.read().await;
    let session = store
        .sessions
        .get(&id)
        .ok_or((StatusCode::NOT_FOUND, "Session not found"))?;
    Ok(Json(WorkoutSessionDetails {
        template_name: session.template_name.clone(),
        date: session.started_at.clone(),
        exercises: store.exercise_rows(id),
    }))
}

async fn session_history(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<TrainingSessionDetails>, (StatusCode, &'static str)> {
    let store = db.read().await;
    let session = store
        .sessions
        .get(&id)
        .ok_or((StatusCode::NOT_FOUND, "Session not found"))?;

    let mut exercises: Vec<&SessionExercise> = store
        .exercises
        .values()
        .filter(|e| e.session_id == id)
        .collect();
    exercises.sort_by_key(|e| e.id);
    let exercises = exercises
        .into_iter()
        .map(|e| SessionExerciseDetails {
            exercise_name: e.name.clone(),
            sets: store
                .sets_for_exercise(e.id)
                .into_iter()
                .map(|s| SetEntry {
                    reps: s.reps,
                    weight: s.weight,
                    id: Some(s.id),
                    set_number: Some(s.set_number),
                })
                .collect(),
        })
        .collect();

    let duration = if session.completed_at.is_some() {
        "60 min".to_string()
    } else {
        "in progress".to_string()
    };
    Ok(Json(TrainingSessionDetails {
        id: session.id,
        template_name: session.template_name.clone(),
        date: session.started_at.clone(),
        duration,
        notes: session.notes.clone(),
        exercises,
    }))
}

async fn add_set(
    State(db): State<Db>,
    Json(input): Json<NewSetRequest>,
) -> Result<(StatusCode, Json<i64>), (StatusCode, &'static str)> {
    let mut store = db.write().await;
    if !store.exercises.contains_key(&input.session_exercise_id) {
        return Err((StatusCode::NOT_FOUND, "Session exercise not found"));
    }
    let id = store.alloc_id();
    store.sets.insert(
        id,
        RecordedSet {
            id,
            session_exercise_id: input.session_exercise_id,
            set_number: input.set_number,
            weight: input.weight,
            reps: input.reps,
        },
    );
    Ok((StatusCode::CREATED, Json(id)))
}

fn set_dto(store: &Store, set: &RecordedSet) -> ExerciseSet {
    let exercise = store.exercises.get(&set.session_exercise_id);
    ExerciseSet {
        id: set.id.to_string(),
        exercise_id: set.session_exercise_id.to_string(),
        exercise_name: exercise.map(|e| e.name.clone()).unwrap_or_default(),
        training_id: exercise
            .map(|e| e.session_id.to_string())
            .unwrap_or_default(),
        order: set.set_number,
        repetitions: set.reps,
        weight: set.weight,
        comment: String::new(),
    }
}

async fn get_set(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<ExerciseSet>, (StatusCode, &'static str)> {
    let store = db.read().await;
    let set = store
        .sets
        .get(&id)
        .ok_or((StatusCode::NOT_FOUND, "Set not found"))?;
    Ok(Json(set_dto(&store, set)))
}

async fn sets_for_session_exercise(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<ExerciseSet>>, (StatusCode, &'static str)> {
    let store = db.read().await;
    if !store.exercises.contains_key(&id) {
        return Err((StatusCode::NOT_FOUND, "Session exercise not found"));
    }
    let sets = store
        .sets_for_exercise(id)
        .into_iter()
        .map(|s| set_dto(&store, s))
        .collect();
    Ok(Json(sets))
}

async fn create_session_exercise(
    State(db): State<Db>,
    Json(input): Json<NewSessionExerciseRequest>,
) -> Result<(StatusCode, Json<i64>), (StatusCode, &'static str)> {
    let mut store = db.write().await;
    if !store.sessions.contains_key(&input.session_id) {
        return Err((StatusCode::NOT_FOUND, "Session not found"));
    }
    let id = store.alloc_id();
    store.exercises.insert(
        id,
        SessionExercise {
            id,
            session_id: input.session_id,
            name: input.name,
            description: input.description,
            planned_sets: input.planned_sets,
        },
    );
    Ok((StatusCode::CREATED, Json(id)))
}

async fn remove_session_exercise(
    State(db): State<Db>,
    Path(id): Path<i64>,
) -> Result<StatusCode, (StatusCode, &'static str)> {
    let mut store = db.write().await;
    if store.exercises.remove(&id).is_none() {
        return Err((StatusCode::NOT_FOUND, "Session exercise not found"));
    }
    store.sets.retain(|_, s| s.session_exercise_id != id);
    Ok(StatusCode::NO_CONTENT)
}
