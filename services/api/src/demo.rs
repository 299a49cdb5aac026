use clap::Args;
use std::path::PathBuf;
use triage_ai::error::AppError;
use triage_ai::workflows::transcript::TranscriptImporter;
use triage_ai::workflows::triage::{
    InterviewSection, QuestionnaireBlueprint, TriageSession,
};

const SCRIPTED_INTERVIEW: [(&str, &str); 8] = [
    ("age", "9"),
    ("sex", "male"),
    ("bleeding_site", "joint"),
    ("onset", "lifelong"),
    ("family_history", "maternal_male_relatives"),
    ("medications", "none"),
    ("liver_illness", "no"),
    ("platelet_count", "325"),
];

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Replay a recorded transcript (CSV with Question,Answer columns)
    /// instead of the built-in scripted interview.
    #[arg(long)]
    pub(crate) transcript: Option<PathBuf>,
    /// Print the full reasoning trail at the end of the interview.
    #[arg(long)]
    pub(crate) show_reasoning: bool,
    /// Skip the undo demonstration after the scripted interview.
    #[arg(long)]
    pub(crate) skip_undo: bool,
}

#[derive(Args, Debug, Default)]
pub(crate) struct OutlineArgs {
    /// Include the diagnosis catalog with baselines and suggested workup.
    #[arg(long)]
    pub(crate) list_diagnoses: bool,
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        transcript,
        show_reasoning,
        skip_undo,
    } = args;

    println!("Diagnostic triage demo");

    if let Some(path) = transcript {
        let import = TranscriptImporter::from_path(path)?;
        match import.recorded_on {
            Some(date) => println!(
                "Replayed transcript recorded {} ({} answers applied)",
                date, import.answers_applied
            ),
            None => println!(
                "Replayed transcript ({} answers applied)",
                import.answers_applied
            ),
        }
        render_session(&import.session, show_reasoning);
        return Ok(());
    }

    let mut session = TriageSession::standard()?;
    println!("Scripted interview (childhood joint bleeder)\n");

    for (question, value) in SCRIPTED_INTERVIEW {
        let prompt = session
            .current_question()
            .map(|current| current.prompt)
            .unwrap_or("(interview complete)");
        println!("Q: {prompt}");
        println!("A: {value}");

        if let Err(err) = session.submit_answer(question, value) {
            println!("  Submission rejected: {err}");
            return Ok(());
        }

        if let Some(top) = session.top_diagnosis() {
            println!(
                "   leading: {} (score {})\n",
                top.diagnosis.name, top.score
            );
        }
    }

    if !skip_undo {
        println!("Undoing the last answer to show replay-based retraction");
        match session.undo() {
            Ok(()) => {
                if let Some(top) = session.top_diagnosis() {
                    println!(
                        "   after undo: {} (score {})",
                        top.diagnosis.name, top.score
                    );
                }
                let (question, value) = SCRIPTED_INTERVIEW[SCRIPTED_INTERVIEW.len() - 1];
                if let Err(err) = session.submit_answer(question, value) {
                    println!("  Resubmission rejected: {err}");
                    return Ok(());
                }
                println!("   answer re-applied\n");
            }
            Err(err) => println!("  Undo unavailable: {err}"),
        }
    }

    render_session(&session, show_reasoning);
    Ok(())
}

pub(crate) fn run_outline(args: OutlineArgs) -> Result<(), AppError> {
    let blueprint = QuestionnaireBlueprint::standard();

    println!("Standard triage questionnaire");
    for section in InterviewSection::ordered() {
        let questions = blueprint.questions_for_section(section);
        if questions.is_empty() {
            continue;
        }

        println!("\n{}", section.label());
        for question in questions {
            println!("- [{}] {}", question.key, question.prompt);
            for option in &question.options {
                println!("    * {} ({})", option.label, option.value);
            }
        }
    }

    if args.list_diagnoses {
        println!("\nDiagnosis catalog");
        for diagnosis in blueprint.diagnoses() {
            println!(
                "- {} [{}] baseline {} ({})",
                diagnosis.name,
                diagnosis.key,
                diagnosis.baseline,
                diagnosis.group.label()
            );
            for feature in &diagnosis.features {
                println!("    feature: {feature}");
            }
            for investigation in &diagnosis.investigations {
                println!("    workup: {investigation}");
            }
        }
    }

    Ok(())
}

pub(crate) fn render_session(session: &TriageSession, show_reasoning: bool) {
    if session.is_completed() {
        println!("Interview complete ({} questions)", session.question_count());
    } else {
        println!(
            "Interview in progress ({}/{} answered)",
            session.position(),
            session.question_count()
        );
        if let Some(question) = session.current_question() {
            println!("Next question: {}", question.prompt);
        }
    }

    println!("\nDifferential ranking");
    for ranked in session.ranked_diagnoses() {
        println!(
            "- {:>3}  {} ({})",
            ranked.score,
            ranked.diagnosis.name,
            ranked.diagnosis.group.label()
        );
    }

    if let Some(top) = session.top_diagnosis() {
        println!("\nLeading diagnosis: {}", top.diagnosis.name);
        for feature in &top.diagnosis.features {
            println!("  - {feature}");
        }
        println!("Suggested workup:");
        for investigation in &top.diagnosis.investigations {
            println!("  - {investigation}");
        }
    }

    if show_reasoning {
        let trail = session.reasoning_log();
        if trail.is_empty() {
            println!("\nReasoning trail: empty");
        } else {
            println!("\nReasoning trail");
            for entry in trail {
                println!("- [{}] {}", entry.question, entry.text);
            }
        }
    }
}
