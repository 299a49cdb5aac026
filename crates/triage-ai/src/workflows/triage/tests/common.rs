use std::sync::Arc;

use axum::response::Response;
use serde_json::Value;

use crate::workflows::triage::domain::{
    AnswerKind, AnswerValue, Diagnosis, DiagnosisGroup, InterviewSection, Question,
};
use crate::workflows::triage::rules::{QuestionRules, ScoreDelta};
use crate::workflows::triage::service::InterviewService;
use crate::workflows::triage::session::TriageSession;

pub(super) const HEMOPHILIA_VIGNETTE: [(&str, &str); 8] = [
    ("age", "10"),
    ("sex", "male"),
    ("bleeding_site", "joint"),
    ("onset", "lifelong"),
    ("family_history", "maternal_male_relatives"),
    ("medications", "none"),
    ("liver_illness", "no"),
    ("platelet_count", "325"),
];

pub(super) fn standard_session() -> TriageSession {
    TriageSession::standard().expect("standard configuration is valid")
}

pub(super) fn answered_session(answers: &[(&str, &str)]) -> TriageSession {
    let mut session = standard_session();
    for (question, value) in answers {
        session
            .submit_answer(question, value)
            .expect("scripted answer accepted");
    }
    session
}

pub(super) fn scenario_session() -> TriageSession {
    answered_session(&[("age", "10"), ("sex", "male"), ("bleeding_site", "joint")])
}

pub(super) fn interview_service() -> Arc<InterviewService> {
    Arc::new(InterviewService::standard().expect("standard configuration is valid"))
}

pub(super) fn free_text_question(key: &'static str) -> Question {
    Question {
        key,
        section: InterviewSection::Demographics,
        prompt: "Test prompt",
        kind: AnswerKind::FreeText,
        options: Vec::new(),
    }
}

pub(super) fn plain_diagnosis(key: &'static str, baseline: i32) -> Diagnosis {
    Diagnosis {
        key,
        group: DiagnosisGroup::Systemic,
        name: "Test diagnosis",
        baseline,
        features: Vec::new(),
        investigations: Vec::new(),
    }
}

pub(super) fn scoring_rule(
    question: &'static str,
    affects: &'static [&'static str],
) -> QuestionRules {
    QuestionRules {
        question,
        parser: None,
        reasoner: None,
        scorer: Some(no_deltas),
        affects,
    }
}

fn no_deltas(_value: &AnswerValue) -> Vec<ScoreDelta> {
    Vec::new()
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}
