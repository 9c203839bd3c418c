//! Full workout lifecycle test against the live mock server.
//!
//! # Design
//! Starts the mock server on a random port, then exercises every API
//! operation over real HTTP through `WorkoutApi`. Validates that request
//! building, the ureq transport, and response parsing work end-to-end with
//! the actual server, including the 404 and connection-failure paths.

use workout_core::{ApiError, NewSessionExercise, NewSet, WorkoutApi};

/// Start the mock server on a random port and return a client bound to it.
fn start_server() -> WorkoutApi {
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            mock_server::run(listener).await
        })
        .unwrap();
    });

    WorkoutApi::new(&format!("http://{addr}"))
}

#[test]
fn workout_lifecycle() {
    let api = start_server();

    // Step 1: templates are seeded; pick PUSH.
    let templates = api.workout_templates().unwrap();
    assert_eq!(templates.len(), 3);
    let push = templates.iter().find(|t| t.name == "PUSH").unwrap();

    // Step 2: start a session for user 1.
    let session_id = api.start_session(1, push.id).unwrap();
    assert!(session_id > 0);

    // Step 3: attach an exercise to the session.
    let exercise_id = api
        .create_session_exercise(&NewSessionExercise {
            session_id,
            name: "Bench press".to_string(),
            description: "Barbell".to_string(),
            planned_sets: 3,
        })
        .unwrap();

    // Step 4: details show the exercise with nothing recorded yet.
    let details = api.workout_session_details(session_id, push.id).unwrap();
    assert_eq!(details.template_name, "PUSH");
    assert_eq!(details.exercises.len(), 1);
    let row = &details.exercises[0];
    assert_eq!(row.session_exercise_id, exercise_id);
    assert_eq!(row.planned_sets, 3);
    assert_eq!(row.completed_sets, 0);
    assert!(row.last_weight.is_none());

    // Step 5: record two sets.
    let first_set_id = api
        .add_set(&NewSet {
            session_exercise_id: exercise_id,
            set_number: 1,
            weight: 100.0,
            reps: 5,
        })
        .unwrap();
    assert!(first_set_id > 0);
    api.add_set(&NewSet {
        session_exercise_id: exercise_id,
        set_number: 2,
        weight: 102.5,
        reps: 5,
    })
    .unwrap();

    // Step 6: the sets come back in set-number order.
    let sets = api.sets_for_session_exercise(exercise_id).unwrap();
    assert_eq!(sets.len(), 2);
    assert_eq!(sets[0].order, 1);
    assert_eq!(sets[1].order, 2);
    assert_eq!(sets[1].weight, 102.5);
    assert_eq!(sets[0].exercise_name, "Bench press");

    // Step 7: a single set can be fetched by id.
    let set = api.set_by_id(&first_set_id.to_string()).unwrap();
    assert_eq!(set.id, first_set_id.to_string());
    assert_eq!(set.repetitions, 5);
    assert_eq!(set.weight, 100.0);

    // Step 8: details reflect the recorded sets.
    let details = api.workout_session_details(session_id, push.id).unwrap();
    assert_eq!(details.exercises[0].completed_sets, 2);
    assert_eq!(details.exercises[0].last_weight, Some(102.5));

    // Step 9: finish — 204 with empty body parses as unit.
    api.finish_session(session_id).unwrap();

    // Step 10: the session is listed for the user as completed.
    let sessions = api.training_sessions(1).unwrap();
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].id, session_id);
    assert_eq!(sessions[0].template_name, "PUSH");
    assert!(sessions[0].completed_at.is_some());

    // Step 11: the historical view carries the exercises and sets.
    let history = api.session_details(session_id).unwrap();
    assert_eq!(history.id, session_id);
    assert_eq!(history.template_name, "PUSH");
    assert_eq!(history.exercises.len(), 1);
    assert_eq!(history.exercises[0].exercise_name, "Bench press");
    assert_eq!(history.exercises[0].sets.len(), 2);
    assert_eq!(history.exercises[0].sets[1].weight, 102.5);

    // Step 12: remove the exercise; details no longer show it.
    api.remove_session_exercise(exercise_id).unwrap();
    let details = api.workout_session_details(session_id, push.id).unwrap();
    assert!(details.exercises.is_empty());
}

#[test]
fn unknown_session_surfaces_status_and_body() {
    let api = start_server();

    let err = api.workout_session_details(9999, 1).unwrap_err();
    match err {
        ApiError::HttpStatus { status, body } => {
            assert_eq!(status, 404);
            assert_eq!(body, "Session not found");
        }
        other => panic!("expected HttpStatus, got {other:?}"),
    }
}

#[test]
fn unreachable_server_is_a_transport_error() {
    // Port 9 (discard) is closed on loopback; the connection is refused.
    let api = WorkoutApi::new("http://127.0.0.1:9");
    let err = api.workout_templates().unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}
