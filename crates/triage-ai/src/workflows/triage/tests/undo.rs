use super::common::*;
use crate::workflows::triage::domain::TriageError;

#[test]
fn undo_without_answers_reports_nothing_to_undo() {
    let mut session = standard_session();
    let baselines = session.scores().clone();

    match session.undo() {
        Err(TriageError::NothingToUndo) => {}
        other => panic!("expected nothing-to-undo, got {other:?}"),
    }

    assert_eq!(session.position(), 0);
    assert_eq!(session.scores(), &baselines);
}

#[test]
fn undo_reverts_the_last_answer() {
    let mut session = scenario_session();
    assert_eq!(session.score_for("hemophilia_a"), Some(10));

    session.undo().expect("undo succeeds");

    assert_eq!(session.score_for("hemophilia_a"), Some(7));
    assert_eq!(session.position(), 2);
    assert!(!session.answers().contains_key("bleeding_site"));
    assert!(session
        .reasoning_log()
        .iter()
        .all(|entry| entry.question != "bleeding_site"));
    assert_eq!(
        session.current_question().map(|question| question.key),
        Some("bleeding_site")
    );
}

#[test]
fn undo_restores_presubmission_state_exactly() {
    let before = answered_session(&HEMOPHILIA_VIGNETTE[..5]);
    let mut session = before.clone();

    session
        .submit_answer("medications", "antiplatelet")
        .expect("medications accepted");
    session.undo().expect("undo succeeds");

    assert_eq!(session.position(), before.position());
    assert_eq!(session.answers(), before.answers());
    assert_eq!(session.reasoning_log(), before.reasoning_log());
    assert_eq!(session.scores(), before.scores());
}

#[test]
fn undo_is_permitted_from_the_completed_state() {
    let mut session = answered_session(&HEMOPHILIA_VIGNETTE);
    assert!(session.is_completed());

    session.undo().expect("undo succeeds");

    assert!(!session.is_completed());
    assert_eq!(session.position(), session.question_count() - 1);
    assert_eq!(
        session.current_question().map(|question| question.key),
        Some("platelet_count")
    );

    session
        .submit_answer("platelet_count", "325")
        .expect("resubmission accepted");
    let replayed = answered_session(&HEMOPHILIA_VIGNETTE);
    assert_eq!(session.scores(), replayed.scores());
    assert_eq!(session.reasoning_log(), replayed.reasoning_log());
}

#[test]
fn consecutive_undos_replay_to_earlier_prefixes() {
    let mut session = answered_session(&HEMOPHILIA_VIGNETTE);

    session.undo().expect("first undo");
    session.undo().expect("second undo");

    let prefix = answered_session(&HEMOPHILIA_VIGNETTE[..6]);
    assert_eq!(session.position(), prefix.position());
    assert_eq!(session.scores(), prefix.scores());
    assert_eq!(session.reasoning_log(), prefix.reasoning_log());
}

#[test]
fn restart_returns_to_baselines() {
    let mut session = answered_session(&HEMOPHILIA_VIGNETTE);

    session.restart();

    let fresh = standard_session();
    assert_eq!(session.position(), 0);
    assert!(session.answers().is_empty());
    assert!(session.reasoning_log().is_empty());
    assert_eq!(session.scores(), fresh.scores());
    assert!(!session.is_completed());
}

#[test]
fn replaying_the_same_answers_is_deterministic() {
    let first = answered_session(&HEMOPHILIA_VIGNETTE);
    let second = answered_session(&HEMOPHILIA_VIGNETTE);

    assert_eq!(first.position(), second.position());
    assert_eq!(first.scores(), second.scores());
    assert_eq!(first.reasoning_log(), second.reasoning_log());
}
