use std::sync::Mutex;

use super::domain::{ConfigurationError, TriageError};
use super::questionnaire::QuestionnaireBlueprint;
use super::report::SessionSnapshot;
use super::rules::RuleTable;
use super::session::TriageSession;

/// Controller owning the single live interview. All engine state is reached
/// through this facade; access is serialized by the mutex, matching the
/// one-session-at-a-time model.
pub struct InterviewService {
    session: Mutex<TriageSession>,
}

impl InterviewService {
    pub fn new(
        blueprint: QuestionnaireBlueprint,
        rules: RuleTable,
    ) -> Result<Self, ConfigurationError> {
        Ok(Self {
            session: Mutex::new(TriageSession::new(blueprint, rules)?),
        })
    }

    pub fn standard() -> Result<Self, ConfigurationError> {
        Self::new(QuestionnaireBlueprint::standard(), RuleTable::standard())
    }

    pub fn submit_answer(
        &self,
        question: &str,
        raw_value: &str,
    ) -> Result<SessionSnapshot, TriageError> {
        let mut session = self.session.lock().expect("session mutex poisoned");
        session.submit_answer(question, raw_value)?;
        Ok(session.snapshot())
    }

    pub fn undo(&self) -> Result<SessionSnapshot, TriageError> {
        let mut session = self.session.lock().expect("session mutex poisoned");
        session.undo()?;
        Ok(session.snapshot())
    }

    pub fn restart(&self) -> SessionSnapshot {
        let mut session = self.session.lock().expect("session mutex poisoned");
        session.restart();
        session.snapshot()
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        self.session
            .lock()
            .expect("session mutex poisoned")
            .snapshot()
    }
}
