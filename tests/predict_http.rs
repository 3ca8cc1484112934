mod common;

use axum::http::StatusCode;
use serde_json::json;

use gamification_insights::insights::config::{EngineConfig, PredictorVariant};

use common::app::{spawn_test_app, spawn_with_engine};
use common::http::{assert_json_error, assert_status_ok_json, post_json, post_raw};

fn is_two_decimals(v: f64) -> bool {
    ((v * 100.0).round() - v * 100.0).abs() < 1e-6
}

#[tokio::test]
async fn it_predict_returns_score_confidence_and_suggestions() {
    let app = spawn_test_app();

    let (status, body) = post_json(
        &app.app,
        "/predict",
        json!({"userId": "u1", "quizId": "q1", "userStats": {"totalPoints": 0, "level": 1, "avgQuizScore": 0.5}}),
    )
    .await;
    assert_status_ok_json(status, &body);

    let data = &body["data"];
    let score = data["predictedScore"].as_f64().unwrap();
    assert!((0.0..=1.0).contains(&score));
    assert!(is_two_decimals(score));
    assert_eq!(data["confidence"], 0.6);
    assert!(!data["suggestions"].as_array().unwrap().is_empty());
}

#[tokio::test]
async fn it_predict_high_confidence_tier() {
    let app = spawn_test_app();

    let (status, body) = post_json(
        &app.app,
        "/predict",
        json!({"userId": "u1", "quizId": "q1", "userStats": {"totalPoints": 200, "level": 5}}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["confidence"], 0.8);
}

#[tokio::test]
async fn it_predict_detailed_variant_is_deterministic() {
    let app = spawn_with_engine(EngineConfig {
        predictor: PredictorVariant::Detailed,
        ..EngineConfig::default()
    });

    let payload = json!({"userId": "u1", "quizId": "q1", "userStats": {}});
    let (_, first) = post_json(&app.app, "/predict", payload.clone()).await;
    let (_, second) = post_json(&app.app, "/predict", payload).await;
    assert_eq!(first["data"]["predictedScore"], 0.23);
    assert_eq!(first["data"], second["data"]);
    assert_eq!(
        first["data"]["suggestions"][0],
        "Review the lesson materials before taking the quiz"
    );
}

#[tokio::test]
async fn it_predict_same_seed_same_answers() {
    let a = spawn_test_app();
    let b = spawn_test_app();
    let payload = json!({"userId": "u1", "quizId": "q1", "userStats": {"totalPoints": 350, "level": 3}});

    for _ in 0..3 {
        let (_, x) = post_json(&a.app, "/predict", payload.clone()).await;
        let (_, y) = post_json(&b.app, "/predict", payload.clone()).await;
        assert_eq!(x["data"], y["data"]);
    }
}

#[tokio::test]
async fn it_predict_rejects_missing_stats() {
    let app = spawn_test_app();

    let (status, body) = post_json(&app.app, "/predict", json!({"userId": "u1", "quizId": "q1"})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_json_error(&body, "INVALID_REQUEST_BODY");
}

#[tokio::test]
async fn it_predict_requires_quiz_id() {
    let app = spawn_test_app();

    let (status, body) = post_json(
        &app.app,
        "/predict",
        json!({"userId": "u1", "userStats": {"totalPoints": 10, "level": 1}}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_json_error(&body, "INVALID_REQUEST_BODY");
    assert!(body["message"].as_str().unwrap().contains("quizId"));
}

#[tokio::test]
async fn it_predict_rejects_non_numeric_points() {
    let app = spawn_test_app();

    let (status, body) = post_json(
        &app.app,
        "/predict",
        json!({"userId": "u1", "quizId": "q1", "userStats": {"totalPoints": "lots"}}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_json_error(&body, "INVALID_REQUEST_BODY");
}

#[tokio::test]
async fn it_predict_rejects_out_of_range_values() {
    let app = spawn_test_app();

    let (status, body) = post_json(
        &app.app,
        "/predict",
        json!({"userId": "u1", "quizId": "q1", "userStats": {"level": 0}}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_json_error(&body, "VALIDATION_ERROR");

    let (status, body) = post_json(
        &app.app,
        "/predict",
        json!({"userId": "u1", "quizId": "q1", "userStats": {"avgQuizScore": 2.0}}),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_json_error(&body, "VALIDATION_ERROR");
}

#[tokio::test]
async fn it_predict_rejects_malformed_json() {
    let app = spawn_test_app();

    let (status, body) = post_raw(&app.app, "/predict", "{\"userId\": ").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_json_error(&body, "INVALID_REQUEST_BODY");
}
