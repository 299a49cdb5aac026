use super::common::*;
use axum::extract::State;
use axum::http::StatusCode;
use serde_json::Value;

use crate::workflows::triage::router::{
    answer_handler, restart_handler, snapshot_handler, undo_handler, AnswerRequest,
};

#[tokio::test]
async fn snapshot_handler_reports_first_question() {
    let service = interview_service();

    let response = snapshot_handler(State(service)).await;
    assert_eq!(response.status(), StatusCode::OK);

    let payload = read_json_body(response).await;
    assert_eq!(
        payload
            .pointer("/current_question/key")
            .and_then(Value::as_str),
        Some("age")
    );
    assert_eq!(payload.get("completed"), Some(&Value::Bool(false)));
    assert_eq!(
        payload.get("total_questions").and_then(Value::as_u64),
        Some(8)
    );
}

#[tokio::test]
async fn answer_handler_conflicts_when_out_of_sequence() {
    let service = interview_service();

    let response = answer_handler(
        State(service),
        axum::Json(AnswerRequest {
            question: "sex".to_string(),
            value: "male".to_string(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let payload = read_json_body(response).await;
    assert!(payload
        .get("error")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .contains("out of sequence"));
}

#[tokio::test]
async fn answer_handler_returns_updated_snapshot() {
    let service = interview_service();

    let response = answer_handler(
        State(service),
        axum::Json(AnswerRequest {
            question: "age".to_string(),
            value: "10".to_string(),
        }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("position").and_then(Value::as_u64), Some(1));
    assert_eq!(
        payload.get("top_diagnosis").and_then(Value::as_str),
        Some("hemophilia_a")
    );
}

#[tokio::test]
async fn undo_handler_conflicts_on_fresh_session() {
    let service = interview_service();

    let response = undo_handler(State(service)).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn undo_handler_reverts_last_answer() {
    let service = interview_service();
    service
        .submit_answer("age", "10")
        .expect("answer accepted");

    let response = undo_handler(State(service)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("position").and_then(Value::as_u64), Some(0));
}

#[tokio::test]
async fn restart_handler_resets_the_interview() {
    let service = interview_service();
    service
        .submit_answer("age", "10")
        .expect("answer accepted");
    service
        .submit_answer("sex", "male")
        .expect("answer accepted");

    let response = restart_handler(State(service)).await;

    assert_eq!(response.status(), StatusCode::OK);
    let payload = read_json_body(response).await;
    assert_eq!(payload.get("position").and_then(Value::as_u64), Some(0));
    assert_eq!(
        payload
            .pointer("/current_question/key")
            .and_then(Value::as_str),
        Some("age")
    );
}
