use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::domain::TriageError;
use super::service::InterviewService;

/// Router builder exposing the interview engine to a rendering layer.
pub fn interview_router(service: Arc<InterviewService>) -> Router {
    Router::new()
        .route("/api/v1/interview", get(snapshot_handler))
        .route("/api/v1/interview/answers", post(answer_handler))
        .route("/api/v1/interview/undo", post(undo_handler))
        .route("/api/v1/interview/restart", post(restart_handler))
        .route("/api/v1/interview/ranking", get(ranking_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct AnswerRequest {
    pub(crate) question: String,
    pub(crate) value: String,
}

pub(crate) async fn snapshot_handler(State(service): State<Arc<InterviewService>>) -> Response {
    (StatusCode::OK, axum::Json(service.snapshot())).into_response()
}

pub(crate) async fn answer_handler(
    State(service): State<Arc<InterviewService>>,
    axum::Json(request): axum::Json<AnswerRequest>,
) -> Response {
    match service.submit_answer(&request.question, &request.value) {
        Ok(snapshot) => (StatusCode::OK, axum::Json(snapshot)).into_response(),
        Err(error @ TriageError::OutOfSequence { .. }) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn undo_handler(State(service): State<Arc<InterviewService>>) -> Response {
    match service.undo() {
        Ok(snapshot) => (StatusCode::OK, axum::Json(snapshot)).into_response(),
        Err(error @ TriageError::NothingToUndo) => {
            let payload = json!({
                "error": error.to_string(),
            });
            (StatusCode::CONFLICT, axum::Json(payload)).into_response()
        }
        Err(other) => {
            let payload = json!({
                "error": other.to_string(),
            });
            (StatusCode::INTERNAL_SERVER_ERROR, axum::Json(payload)).into_response()
        }
    }
}

pub(crate) async fn restart_handler(State(service): State<Arc<InterviewService>>) -> Response {
    (StatusCode::OK, axum::Json(service.restart())).into_response()
}

pub(crate) async fn ranking_handler(State(service): State<Arc<InterviewService>>) -> Response {
    let snapshot = service.snapshot();
    let payload = json!({
        "ranking": snapshot.ranking,
        "top_diagnosis": snapshot.top_diagnosis,
    });
    (StatusCode::OK, axum::Json(payload)).into_response()
}
