use crate::infra::AppState;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use serde::{Deserialize, Serialize};
use serde_json::json;
use std::io::Cursor;
use std::sync::Arc;
use triage_ai::error::AppError;
use triage_ai::workflows::transcript::TranscriptImporter;
use triage_ai::workflows::triage::{interview_router, InterviewService, SessionSnapshot};

pub(crate) fn with_interview_routes(service: Arc<InterviewService>) -> axum::Router {
    interview_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/interview/replay",
            axum::routing::post(replay_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReplayRequest {
    pub(crate) transcript_csv: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct ReplayResponse {
    pub(crate) answers_applied: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) recorded_on: Option<String>,
    pub(crate) snapshot: SessionSnapshot,
}

/// Replay an inline transcript into a fresh session. The live interview held
/// by the service is untouched.
pub(crate) async fn replay_endpoint(
    Json(payload): Json<ReplayRequest>,
) -> Result<Json<ReplayResponse>, AppError> {
    let reader = Cursor::new(payload.transcript_csv.into_bytes());
    let import = TranscriptImporter::from_reader(reader)?;

    Ok(Json(ReplayResponse {
        answers_applied: import.answers_applied,
        recorded_on: import.recorded_on.map(|date| date.to_string()),
        snapshot: import.session.snapshot(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replay_endpoint_returns_resulting_snapshot() {
        let request = ReplayRequest {
            transcript_csv: "Question,Answer,Recorded At\n\
age,10,2025-11-03T09:30:00Z\n\
sex,male,2025-11-03T09:31:00Z\n\
bleeding_site,joint,2025-11-03T09:32:00Z\n"
                .to_string(),
        };

        let Json(body) = replay_endpoint(Json(request)).await.expect("replay succeeds");

        assert_eq!(body.answers_applied, 3);
        assert_eq!(body.recorded_on.as_deref(), Some("2025-11-03"));
        assert!(!body.snapshot.completed);
        assert_eq!(body.snapshot.top_diagnosis, Some("hemophilia_a"));
        assert_eq!(body.snapshot.ranking[0].score, 10);
    }

    #[tokio::test]
    async fn replay_endpoint_rejects_out_of_order_transcripts() {
        let request = ReplayRequest {
            transcript_csv: "Question,Answer\nsex,male\n".to_string(),
        };

        let error = replay_endpoint(Json(request))
            .await
            .expect_err("expected rejection");

        assert!(matches!(error, AppError::Import(_)));
    }
}
