use super::common::*;
use crate::workflows::triage::domain::{AnswerValue, TriageError};
use crate::workflows::triage::questionnaire::QuestionnaireBlueprint;
use crate::workflows::triage::rules::RuleTable;
use crate::workflows::triage::session::TriageSession;

#[test]
fn submit_records_typed_value_and_advances() {
    let mut session = standard_session();

    session.submit_answer("age", "10").expect("age accepted");

    assert_eq!(session.position(), 1);
    assert_eq!(session.answers().get("age"), Some(&AnswerValue::Number(10)));
    assert_eq!(
        session.current_question().map(|question| question.key),
        Some("sex")
    );
}

#[test]
fn mismatched_question_is_rejected_without_mutation() {
    let mut session = standard_session();
    let baselines = session.scores().clone();

    match session.submit_answer("sex", "male") {
        Err(TriageError::OutOfSequence {
            submitted,
            expected,
        }) => {
            assert_eq!(submitted, "sex");
            assert_eq!(expected, Some("age"));
        }
        other => panic!("expected out-of-sequence rejection, got {other:?}"),
    }

    assert_eq!(session.position(), 0);
    assert!(session.answers().is_empty());
    assert!(session.reasoning_log().is_empty());
    assert_eq!(session.scores(), &baselines);
}

#[test]
fn unknown_question_key_is_rejected() {
    let mut session = standard_session();

    match session.submit_answer("blood_type", "o_negative") {
        Err(TriageError::OutOfSequence { submitted, .. }) => {
            assert_eq!(submitted, "blood_type");
        }
        other => panic!("expected out-of-sequence rejection, got {other:?}"),
    }
}

#[test]
fn unparsable_answer_still_advances_with_unknown() {
    let mut session = standard_session();
    let baselines = session.scores().clone();

    session
        .submit_answer("age", "not-a-number")
        .expect("unparsable input is not an error");

    assert_eq!(session.position(), 1);
    assert_eq!(
        session.answers().get("age"),
        Some(&AnswerValue::Unknown)
    );
    assert_eq!(session.scores(), &baselines, "unknown carries no score");
    assert!(session
        .reasoning_log()
        .iter()
        .any(|entry| entry.question == "age" && entry.text.contains("Age unclear")));
}

#[test]
fn choice_matching_ignores_ascii_case() {
    let mut session = answered_session(&[("age", "10")]);

    session.submit_answer("sex", "Male").expect("sex accepted");

    assert_eq!(
        session.answers().get("sex"),
        Some(&AnswerValue::Choice("male"))
    );
}

#[test]
fn unmatched_choice_records_unknown() {
    let mut session = answered_session(&[("age", "10"), ("sex", "male")]);
    let before = session.scores().clone();

    session
        .submit_answer("bleeding_site", "elbow")
        .expect("unlisted choice is not an error");

    assert_eq!(
        session.answers().get("bleeding_site"),
        Some(&AnswerValue::Unknown)
    );
    assert_eq!(session.scores(), &before);
    assert_eq!(session.position(), 3);
}

#[test]
fn reasoning_skipped_when_rule_has_nothing_to_say() {
    let mut session = answered_session(&HEMOPHILIA_VIGNETTE[..5]);
    let entries_before = session.reasoning_log().len();

    session
        .submit_answer("medications", "none")
        .expect("medications accepted");

    assert_eq!(session.reasoning_log().len(), entries_before);
}

#[test]
fn interview_completes_after_last_question() {
    let session = answered_session(&HEMOPHILIA_VIGNETTE);

    assert!(session.is_completed());
    assert_eq!(session.position(), session.question_count());
    assert!(session.current_question().is_none());
}

#[test]
fn submissions_after_completion_are_out_of_sequence() {
    let mut session = answered_session(&HEMOPHILIA_VIGNETTE);

    match session.submit_answer("age", "11") {
        Err(TriageError::OutOfSequence { expected, .. }) => assert_eq!(expected, None),
        other => panic!("expected out-of-sequence rejection, got {other:?}"),
    }
}

#[test]
fn free_text_without_rules_records_trimmed_text() {
    let blueprint = QuestionnaireBlueprint::new(
        vec![free_text_question("presenting_complaint")],
        vec![plain_diagnosis("anemia", 1)],
    );
    let mut session =
        TriageSession::new(blueprint, RuleTable::new(Vec::new())).expect("valid configuration");

    session
        .submit_answer("presenting_complaint", "  gum bleeding  ")
        .expect("free text accepted");

    assert_eq!(
        session.answers().get("presenting_complaint"),
        Some(&AnswerValue::Text("gum bleeding".to_string()))
    );
}

#[test]
fn empty_free_text_records_unknown() {
    let blueprint = QuestionnaireBlueprint::new(
        vec![free_text_question("presenting_complaint")],
        vec![plain_diagnosis("anemia", 1)],
    );
    let mut session =
        TriageSession::new(blueprint, RuleTable::new(Vec::new())).expect("valid configuration");

    session
        .submit_answer("presenting_complaint", "   ")
        .expect("blank free text accepted");

    assert_eq!(
        session.answers().get("presenting_complaint"),
        Some(&AnswerValue::Unknown)
    );
}
