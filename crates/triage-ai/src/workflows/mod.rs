pub mod transcript;
pub mod triage;
