use std::collections::{BTreeMap, BTreeSet};

use super::domain::{
    AnswerKind, AnswerValue, ConfigurationError, Diagnosis, Question, ReasoningEntry, TriageError,
};
use super::questionnaire::QuestionnaireBlueprint;
use super::report::SessionSnapshot;
use super::rules::{RuleTable, ScoreDelta};

/// A diagnosis paired with its current tally, as returned by the ranking
/// queries. Catalog declaration order breaks score ties.
#[derive(Debug, Clone, Copy)]
pub struct RankedDiagnosis<'a> {
    pub diagnosis: &'a Diagnosis,
    pub score: i32,
}

/// Mutable state of one triage interview. The blueprint and rule table are
/// injected at construction, validated once, and never change afterwards;
/// every later mutation goes through `submit_answer`, `undo`, or `restart`.
#[derive(Debug, Clone)]
pub struct TriageSession {
    blueprint: QuestionnaireBlueprint,
    rules: RuleTable,
    position: usize,
    answers: BTreeMap<&'static str, AnswerValue>,
    reasoning: Vec<ReasoningEntry>,
    scores: BTreeMap<&'static str, i32>,
}

impl TriageSession {
    pub fn new(
        blueprint: QuestionnaireBlueprint,
        rules: RuleTable,
    ) -> Result<Self, ConfigurationError> {
        validate(&blueprint, &rules)?;
        let scores = baseline_scores(&blueprint);

        Ok(Self {
            blueprint,
            rules,
            position: 0,
            answers: BTreeMap::new(),
            reasoning: Vec::new(),
            scores,
        })
    }

    pub fn standard() -> Result<Self, ConfigurationError> {
        Self::new(QuestionnaireBlueprint::standard(), RuleTable::standard())
    }

    /// Apply one raw answer to the question currently awaiting one. Parsing
    /// failures are not errors: the answer is recorded as `Unknown` and the
    /// interview still advances. Only a question-key mismatch (or a
    /// submission after completion) is rejected, without any mutation.
    pub fn submit_answer(&mut self, question_key: &str, raw_value: &str) -> Result<(), TriageError> {
        let Some(question) = self.blueprint.question_at(self.position) else {
            return Err(TriageError::OutOfSequence {
                submitted: question_key.to_owned(),
                expected: None,
            });
        };
        if question.key != question_key {
            return Err(TriageError::OutOfSequence {
                submitted: question_key.to_owned(),
                expected: Some(question.key),
            });
        }

        let entry = self.rules.rules_for(question.key);
        let value = match entry.and_then(|rules| rules.parser) {
            Some(parser) => parser(raw_value),
            None => default_parse(question, raw_value),
        };

        self.answers.insert(question.key, value.clone());

        if let Some(reasoner) = entry.and_then(|rules| rules.reasoner) {
            if let Some(text) = reasoner(&value) {
                if !text.is_empty() {
                    self.reasoning.push(ReasoningEntry {
                        question: question.key,
                        text,
                    });
                }
            }
        }

        if let Some(scorer) = entry.and_then(|rules| rules.scorer) {
            apply_deltas(&mut self.scores, scorer(&value));
        }

        self.position += 1;
        Ok(())
    }

    /// Revert the most recent answer. Scores are recomputed by replaying the
    /// retained answers from catalog baselines rather than subtracting
    /// inverse deltas, so the result is identical to a session that never saw
    /// the undone answer. Valid from the completed state.
    pub fn undo(&mut self) -> Result<(), TriageError> {
        if self.position == 0 {
            return Err(TriageError::NothingToUndo);
        }

        self.position -= 1;
        if let Some(question) = self.blueprint.question_at(self.position) {
            self.answers.remove(question.key);
            self.reasoning.retain(|entry| entry.question != question.key);
        }
        self.replay_scores();
        Ok(())
    }

    /// Reset to the initial state: first question pending, empty trail,
    /// catalog baseline scores.
    pub fn restart(&mut self) {
        self.position = 0;
        self.answers.clear();
        self.reasoning.clear();
        self.scores = baseline_scores(&self.blueprint);
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.blueprint.question_at(self.position)
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn question_count(&self) -> usize {
        self.blueprint.question_count()
    }

    pub fn is_completed(&self) -> bool {
        self.position == self.blueprint.question_count()
    }

    pub fn answers(&self) -> &BTreeMap<&'static str, AnswerValue> {
        &self.answers
    }

    pub fn reasoning_log(&self) -> &[ReasoningEntry] {
        &self.reasoning
    }

    pub fn scores(&self) -> &BTreeMap<&'static str, i32> {
        &self.scores
    }

    pub fn score_for(&self, diagnosis: &str) -> Option<i32> {
        self.scores.get(diagnosis).copied()
    }

    pub fn blueprint(&self) -> &QuestionnaireBlueprint {
        &self.blueprint
    }

    pub fn ranked_diagnoses(&self) -> Vec<RankedDiagnosis<'_>> {
        let mut ranking: Vec<RankedDiagnosis<'_>> = self
            .blueprint
            .diagnoses()
            .iter()
            .map(|diagnosis| RankedDiagnosis {
                diagnosis,
                score: self
                    .scores
                    .get(diagnosis.key)
                    .copied()
                    .unwrap_or(diagnosis.baseline),
            })
            .collect();

        // Stable sort: equal scores keep catalog declaration order.
        ranking.sort_by(|a, b| b.score.cmp(&a.score));
        ranking
    }

    pub fn top_diagnosis(&self) -> Option<RankedDiagnosis<'_>> {
        self.ranked_diagnoses().into_iter().next()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::capture(self)
    }

    fn replay_scores(&mut self) {
        self.scores = baseline_scores(&self.blueprint);

        for question in self.blueprint.questions().iter().take(self.position) {
            let Some(value) = self.answers.get(question.key) else {
                continue;
            };
            if let Some(scorer) = self
                .rules
                .rules_for(question.key)
                .and_then(|rules| rules.scorer)
            {
                apply_deltas(&mut self.scores, scorer(value));
            }
        }
    }
}

fn baseline_scores(blueprint: &QuestionnaireBlueprint) -> BTreeMap<&'static str, i32> {
    blueprint
        .diagnoses()
        .iter()
        .map(|diagnosis| (diagnosis.key, diagnosis.baseline))
        .collect()
}

fn apply_deltas(scores: &mut BTreeMap<&'static str, i32>, deltas: Vec<ScoreDelta>) {
    for delta in deltas {
        // Rule tables are validated against the catalog at construction, so
        // every delta key resolves.
        if let Some(score) = scores.get_mut(delta.diagnosis) {
            *score += delta.delta;
        }
    }
}

fn default_parse(question: &Question, raw: &str) -> AnswerValue {
    match question.kind {
        AnswerKind::FreeText => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                AnswerValue::Unknown
            } else {
                AnswerValue::Text(trimmed.to_owned())
            }
        }
        AnswerKind::SingleChoice => question
            .options
            .iter()
            .find(|option| option.value.eq_ignore_ascii_case(raw.trim()))
            .map(|option| AnswerValue::Choice(option.value))
            .unwrap_or(AnswerValue::Unknown),
    }
}

fn validate(
    blueprint: &QuestionnaireBlueprint,
    rules: &RuleTable,
) -> Result<(), ConfigurationError> {
    if blueprint.diagnoses().is_empty() {
        return Err(ConfigurationError::EmptyCatalog);
    }

    let mut question_keys = BTreeSet::new();
    for question in blueprint.questions() {
        if !question_keys.insert(question.key) {
            return Err(ConfigurationError::DuplicateQuestion(question.key));
        }
    }

    let mut diagnosis_keys = BTreeSet::new();
    for diagnosis in blueprint.diagnoses() {
        if !diagnosis_keys.insert(diagnosis.key) {
            return Err(ConfigurationError::DuplicateDiagnosis(diagnosis.key));
        }
    }

    let mut rule_keys = BTreeSet::new();
    for entry in rules.entries() {
        if !question_keys.contains(entry.question) {
            return Err(ConfigurationError::UnknownRuleQuestion(entry.question));
        }
        if !rule_keys.insert(entry.question) {
            return Err(ConfigurationError::DuplicateRule(entry.question));
        }
        for &diagnosis in entry.affects {
            if !diagnosis_keys.contains(diagnosis) {
                return Err(ConfigurationError::UnknownRuleDiagnosis {
                    question: entry.question,
                    diagnosis,
                });
            }
        }
    }

    Ok(())
}
