use axum::{body::to_bytes, http::Request, Router};
use serde_json::{json, Value};
use tower::ServiceExt;
use workout_tracker::{config::Config, state::AppState};

fn app_with(config: Config) -> Router {
    workout_tracker::app(AppState::new(config))
}

fn app() -> Router {
    app_with(Config::default())
}

async fn post_json(app: Router, uri: &str, body: Value) -> (axum::http::StatusCode, Value) {
    let response = app
        .oneshot(
            Request::builder()
                .uri(uri)
                .method("POST")
                .header("content-type", "application/json")
                .body(axum::body::Body::from(body.to_string()))
                .expect("request"),
        )
        .await
        .expect("response");

    let status = response.status();
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let json: Value = serde_json::from_slice(&body).expect("json body");
    (status, json)
}

#[tokio::test]
async fn summary_returns_metrics_and_message() {
    let (status, body) = post_json(
        app(),
        "/api/summary",
        json!({"workout_type": "SWM", "data": [720, 1, 80, 25, 40]}),
    )
    .await;

    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(body["summary"]["training_type"], "Swimming");
    assert_eq!(body["summary"]["calories"].as_f64(), Some(336.0));
    assert_eq!(
        body["message"],
        "Тип тренировки: Swimming; Длительность: 1.000 ч.; Дистанция: 0.994 км; Ср. скорость: 1.000 км/ч; Потрачено ккал: 336.000."
    );
}

#[tokio::test]
async fn summary_rejects_unknown_workout_type() {
    let (status, body) = post_json(
        app(),
        "/api/summary",
        json!({"workout_type": "BIKE", "data": [1, 1, 1]}),
    )
    .await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    let error = body["error"].as_str().expect("error message");
    assert!(error.contains("BIKE"));
    assert!(error.contains("WLK"));
}

#[tokio::test]
async fn summary_rejects_zero_duration() {
    let (status, body) = post_json(
        app(),
        "/api/summary",
        json!({"workout_type": "RUN", "data": [15000, 0, 75]}),
    )
    .await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
    assert!(body["error"]
        .as_str()
        .expect("error message")
        .contains("Division by zero"));
}

#[tokio::test]
async fn batch_reports_each_record() {
    let (status, body) = post_json(
        app(),
        "/api/summaries",
        json!({"records": [
            {"workout_type": "RUN", "data": [15000, 1, 75]},
            {"workout_type": "WLK", "data": [9000, 1]},
        ]}),
    )
    .await;

    assert_eq!(status, axum::http::StatusCode::OK);
    assert_eq!(body["failed"], 1);
    let results = body["results"].as_array().expect("results");
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["summary"]["training_type"], "Running");
    assert_eq!(results[1]["workout_type"], "WLK");
    assert!(results[1]["error"]
        .as_str()
        .expect("error message")
        .contains("takes 4 values, got 2"));
}

#[tokio::test]
async fn batch_over_limit_is_rejected() {
    let config = Config {
        max_batch_size: 1,
        ..Config::default()
    };
    let (status, _) = post_json(
        app_with(config),
        "/api/summaries",
        json!({"records": [
            {"workout_type": "RUN", "data": [15000, 1, 75]},
            {"workout_type": "RUN", "data": [15000, 1, 75]},
        ]}),
    )
    .await;

    assert_eq!(status, axum::http::StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn workout_types_lists_registry() {
    let response = app()
        .oneshot(
            Request::builder()
                .uri("/api/workout-types")
                .method("GET")
                .body(axum::body::Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), axum::http::StatusCode::OK);
    let body = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body bytes");
    let types: Value = serde_json::from_slice(&body).expect("json body");
    let tags: Vec<&str> = types
        .as_array()
        .expect("array")
        .iter()
        .filter_map(|t| t["tag"].as_str())
        .collect();
    assert_eq!(tags, vec!["SWM", "RUN", "WLK"]);
    assert_eq!(types[2]["fields"][3], "height_cm");
}
