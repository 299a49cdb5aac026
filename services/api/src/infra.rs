use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use triage_ai::error::AppError;
use triage_ai::workflows::triage::InterviewService;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

pub(crate) fn build_interview_service() -> Result<Arc<InterviewService>, AppError> {
    let service = InterviewService::standard()?;
    Ok(Arc::new(service))
}
