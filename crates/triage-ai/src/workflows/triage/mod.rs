//! Interactive bleeding-disorder triage: an ordered question bank, a
//! declarative rule table, and a session that keeps scores, reasoning, and
//! undo-by-replay deterministic.

pub mod domain;
pub mod questionnaire;
pub mod report;
pub mod router;
pub mod rules;
pub mod service;
pub mod session;

#[cfg(test)]
mod tests;

pub use domain::{
    AnswerKind, AnswerOption, AnswerValue, ConfigurationError, Diagnosis, DiagnosisGroup,
    InterviewSection, Question, ReasoningEntry, TriageError,
};
pub use questionnaire::QuestionnaireBlueprint;
pub use report::{QuestionView, RankedDiagnosisView, ReasoningNoteView, SessionSnapshot};
pub use router::interview_router;
pub use rules::{QuestionRules, RuleTable, ScoreDelta};
pub use service::InterviewService;
pub use session::{RankedDiagnosis, TriageSession};
