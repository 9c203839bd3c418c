//! Verify build/parse methods against JSON test vectors stored in
//! `test-vectors/`.
//!
//! Each vector file describes inputs, expected requests, simulated
//! responses, and expected parse results. Comparing parsed JSON (not raw
//! strings) avoids false negatives from field-ordering differences.

use workout_core::{
    ApiError, HttpMethod, HttpRequest, HttpResponse, NewSet, StartSession, WorkoutClient,
    WorkoutSessionDetails, WorkoutTemplate,
};

const BASE_URL: &str = "http://localhost:5000";

fn client() -> WorkoutClient {
    WorkoutClient::new(BASE_URL)
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

/// Assert that a built request matches the vector's `expected_request`.
fn assert_request(name: &str, req: &HttpRequest, expected: &serde_json::Value) {
    assert_eq!(
        req.method,
        parse_method(expected["method"].as_str().unwrap()),
        "{name}: method"
    );
    assert_eq!(
        req.path,
        format!("{BASE_URL}{}", expected["path"].as_str().unwrap()),
        "{name}: path"
    );

    let expected_headers: Vec<(String, String)> = expected["headers"]
        .as_array()
        .unwrap()
        .iter()
        .map(|h| {
            let pair = h.as_array().unwrap();
            (
                pair[0].as_str().unwrap().to_string(),
                pair[1].as_str().unwrap().to_string(),
            )
        })
        .collect();
    assert_eq!(req.headers, expected_headers, "{name}: headers");

    match expected.get("body") {
        Some(expected_body) => {
            let body: serde_json::Value =
                serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
            assert_eq!(&body, expected_body, "{name}: body");
        }
        None => assert!(req.body.is_none(), "{name}: body should be None"),
    }
}

fn simulated(case: &serde_json::Value) -> HttpResponse {
    let sim = &case["simulated_response"];
    HttpResponse {
        status: sim["status"].as_u64().unwrap() as u16,
        headers: Vec::new(),
        body: sim["body"].as_str().unwrap().to_string(),
    }
}

/// Assert that a failure matches the vector's `expected_error`.
fn assert_http_error(name: &str, err: &ApiError, expected: &serde_json::Value) {
    match err {
        ApiError::HttpStatus { status, body } => {
            assert_eq!(
                u64::from(*status),
                expected["status"].as_u64().unwrap(),
                "{name}: status"
            );
            assert_eq!(body, expected["body"].as_str().unwrap(), "{name}: body");
        }
        other => panic!("{name}: expected HttpStatus, got {other:?}"),
    }
}

#[test]
fn templates_test_vectors() {
    let raw = include_str!("../../test-vectors/templates.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();

        let req = c.build_workout_templates();
        assert_request(name, &req, &case["expected_request"]);

        let templates = c.parse_workout_templates(simulated(case)).unwrap();
        let expected: Vec<WorkoutTemplate> =
            serde_json::from_value(case["expected_result"].clone()).unwrap();
        assert_eq!(templates, expected, "{name}: parsed result");
    }
}

#[test]
fn start_session_test_vectors() {
    let raw = include_str!("../../test-vectors/start_session.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: StartSession = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_start_session(&input).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_start_session(simulated(case));
        if let Some(expected_error) = case.get("expected_error") {
            assert_http_error(name, &result.unwrap_err(), expected_error);
        } else {
            assert_eq!(
                result.unwrap(),
                case["expected_result"].as_i64().unwrap(),
                "{name}: parsed result"
            );
        }
    }
}

#[test]
fn session_details_test_vectors() {
    let raw = include_str!("../../test-vectors/session_details.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let session_id = case["input_session_id"].as_i64().unwrap();
        let template_id = case["input_template_id"].as_i64().unwrap();

        let req = c.build_workout_session_details(session_id, template_id);
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_workout_session_details(simulated(case));
        if let Some(expected_error) = case.get("expected_error") {
            assert_http_error(name, &result.unwrap_err(), expected_error);
        } else {
            let expected: WorkoutSessionDetails =
                serde_json::from_value(case["expected_result"].clone()).unwrap();
            assert_eq!(result.unwrap(), expected, "{name}: parsed result");
        }
    }
}

#[test]
fn add_set_test_vectors() {
    let raw = include_str!("../../test-vectors/add_set.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let input: NewSet = serde_json::from_value(case["input"].clone()).unwrap();

        let req = c.build_add_set(&input).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let id = c.parse_add_set(simulated(case)).unwrap();
        assert_eq!(
            id,
            case["expected_result"].as_i64().unwrap(),
            "{name}: parsed result"
        );
    }
}

#[test]
fn finish_session_test_vectors() {
    let raw = include_str!("../../test-vectors/finish_session.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let c = client();
    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let session_id = case["input_session_id"].as_i64().unwrap();

        let req = c.build_finish_session(session_id).unwrap();
        assert_request(name, &req, &case["expected_request"]);

        let result = c.parse_finish_session(simulated(case));
        if let Some(expected_error) = case.get("expected_error") {
            assert_http_error(name, &result.unwrap_err(), expected_error);
        } else {
            assert!(result.is_ok(), "{name}: expected success");
        }
    }
}
