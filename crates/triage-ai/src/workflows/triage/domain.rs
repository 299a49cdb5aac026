use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InterviewSection {
    Demographics,
    BleedingHistory,
    Background,
    Workup,
}

impl InterviewSection {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Demographics,
            Self::BleedingHistory,
            Self::Background,
            Self::Workup,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Demographics => "Demographics",
            Self::BleedingHistory => "Bleeding History",
            Self::Background => "Background & Exposures",
            Self::Workup => "Initial Workup",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DiagnosisGroup {
    Coagulation,
    Platelet,
    Systemic,
}

impl DiagnosisGroup {
    pub const fn ordered() -> [Self; 3] {
        [Self::Coagulation, Self::Platelet, Self::Systemic]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Coagulation => "Coagulation factor disorders",
            Self::Platelet => "Platelet disorders",
            Self::Systemic => "Systemic & acquired causes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerKind {
    FreeText,
    SingleChoice,
}

impl AnswerKind {
    pub const fn label(self) -> &'static str {
        match self {
            Self::FreeText => "free text",
            Self::SingleChoice => "single choice",
        }
    }
}

/// One selectable value of a single-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AnswerOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// A question definition. Bank order defines the interview sequence; parse,
/// reasoning, and scoring behavior is registered separately in the rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    pub key: &'static str,
    pub section: InterviewSection,
    pub prompt: &'static str,
    pub kind: AnswerKind,
    pub options: Vec<AnswerOption>,
}

/// Typed value recorded for an answered question. `Unknown` is the explicit
/// "unparsable" sentinel and carries no information into reasoning or scoring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerValue {
    Number(i64),
    Choice(&'static str),
    Text(String),
    Unknown,
}

impl AnswerValue {
    pub const fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }
}

/// A candidate condition with its baseline tally and workup material.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnosis {
    pub key: &'static str,
    pub group: DiagnosisGroup,
    pub name: &'static str,
    pub baseline: i32,
    pub features: Vec<&'static str>,
    pub investigations: Vec<&'static str>,
}

/// One line of the running justification trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReasoningEntry {
    pub question: &'static str,
    pub text: String,
}

/// Recoverable outcomes of session operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TriageError {
    #[error("answer for '{submitted}' is out of sequence")]
    OutOfSequence {
        submitted: String,
        /// Key of the question currently awaiting an answer, `None` once the
        /// interview is complete.
        expected: Option<&'static str>,
    },
    #[error("no answers recorded; nothing to undo")]
    NothingToUndo,
}

/// Fatal mismatches between the question bank, diagnosis catalog, and rule
/// table, detected once at construction.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigurationError {
    #[error("diagnosis catalog is empty")]
    EmptyCatalog,
    #[error("duplicate question key '{0}' in question bank")]
    DuplicateQuestion(&'static str),
    #[error("duplicate diagnosis key '{0}' in catalog")]
    DuplicateDiagnosis(&'static str),
    #[error("rule table references unknown question '{0}'")]
    UnknownRuleQuestion(&'static str),
    #[error("rules for '{question}' reference unknown diagnosis '{diagnosis}'")]
    UnknownRuleDiagnosis {
        question: &'static str,
        diagnosis: &'static str,
    },
    #[error("multiple rule entries registered for question '{0}'")]
    DuplicateRule(&'static str),
}
