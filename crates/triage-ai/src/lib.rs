//! Interactive diagnostic triage engine: questionnaire state, rule-based
//! scoring with a running justification trail, and deterministic
//! undo-by-replay, plus the service plumbing shared by its frontends.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
