use serde::Serialize;

use super::domain::{AnswerKind, DiagnosisGroup, InterviewSection};
use super::session::TriageSession;

#[derive(Debug, Clone, Serialize)]
pub struct AnswerOptionView {
    pub value: &'static str,
    pub label: &'static str,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuestionView {
    pub key: &'static str,
    pub section: InterviewSection,
    pub section_label: &'static str,
    pub prompt: &'static str,
    pub kind: AnswerKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<AnswerOptionView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedDiagnosisView {
    pub key: &'static str,
    pub name: &'static str,
    pub group: DiagnosisGroup,
    pub group_label: &'static str,
    pub score: i32,
    pub features: Vec<&'static str>,
    pub investigations: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReasoningNoteView {
    pub question: &'static str,
    pub text: String,
}

/// Everything a rendering layer needs to draw the interview: progress, the
/// pending question, the justification trail, and the live ranking.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub position: usize,
    pub total_questions: usize,
    pub completed: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_question: Option<QuestionView>,
    pub reasoning: Vec<ReasoningNoteView>,
    pub ranking: Vec<RankedDiagnosisView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_diagnosis: Option<&'static str>,
}

impl SessionSnapshot {
    pub fn capture(session: &TriageSession) -> Self {
        let current_question = session.current_question().map(|question| QuestionView {
            key: question.key,
            section: question.section,
            section_label: question.section.label(),
            prompt: question.prompt,
            kind: question.kind,
            options: question
                .options
                .iter()
                .map(|option| AnswerOptionView {
                    value: option.value,
                    label: option.label,
                })
                .collect(),
        });

        let reasoning = session
            .reasoning_log()
            .iter()
            .map(|entry| ReasoningNoteView {
                question: entry.question,
                text: entry.text.clone(),
            })
            .collect();

        let ranking: Vec<RankedDiagnosisView> = session
            .ranked_diagnoses()
            .into_iter()
            .map(|ranked| RankedDiagnosisView {
                key: ranked.diagnosis.key,
                name: ranked.diagnosis.name,
                group: ranked.diagnosis.group,
                group_label: ranked.diagnosis.group.label(),
                score: ranked.score,
                features: ranked.diagnosis.features.clone(),
                investigations: ranked.diagnosis.investigations.clone(),
            })
            .collect();

        let top_diagnosis = ranking.first().map(|entry| entry.key);

        Self {
            position: session.position(),
            total_questions: session.question_count(),
            completed: session.is_completed(),
            current_question,
            reasoning,
            ranking,
            top_diagnosis,
        }
    }
}
