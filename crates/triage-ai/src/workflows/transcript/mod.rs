//! Replay of recorded interview transcripts (CSV exports with `Question`,
//! `Answer`, and optional `Recorded At` columns) into a fresh triage session.

mod parser;

use crate::workflows::triage::domain::{ConfigurationError, TriageError};
use crate::workflows::triage::TriageSession;
use chrono::NaiveDate;
use std::io::Read;
use std::path::Path;

#[derive(Debug)]
pub enum TranscriptImportError {
    Io(std::io::Error),
    Csv(csv::Error),
    Config(ConfigurationError),
    Triage(TriageError),
}

impl std::fmt::Display for TranscriptImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranscriptImportError::Io(err) => write!(f, "failed to read transcript: {}", err),
            TranscriptImportError::Csv(err) => write!(f, "invalid transcript CSV data: {}", err),
            TranscriptImportError::Config(err) => {
                write!(f, "questionnaire configuration rejected: {}", err)
            }
            TranscriptImportError::Triage(err) => {
                write!(f, "could not replay transcript into a session: {}", err)
            }
        }
    }
}

impl std::error::Error for TranscriptImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TranscriptImportError::Io(err) => Some(err),
            TranscriptImportError::Csv(err) => Some(err),
            TranscriptImportError::Config(err) => Some(err),
            TranscriptImportError::Triage(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for TranscriptImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for TranscriptImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

impl From<ConfigurationError> for TranscriptImportError {
    fn from(err: ConfigurationError) -> Self {
        Self::Config(err)
    }
}

impl From<TriageError> for TranscriptImportError {
    fn from(err: TriageError) -> Self {
        Self::Triage(err)
    }
}

/// Result of a replay: the hydrated session plus transcript metadata.
#[derive(Debug)]
pub struct TranscriptImport {
    pub session: TriageSession,
    pub answers_applied: usize,
    pub recorded_on: Option<NaiveDate>,
}

pub struct TranscriptImporter;

impl TranscriptImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<TranscriptImport, TranscriptImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Replay every row, in order, into a fresh standard session. Rows must
    /// follow the question bank sequence; an out-of-order row aborts the
    /// import. Unparsable answer values replay as `Unknown`, same as live
    /// input.
    pub fn from_reader<R: Read>(reader: R) -> Result<TranscriptImport, TranscriptImportError> {
        let mut session = TriageSession::standard()?;
        let mut answers_applied = 0;
        let mut recorded_on: Option<NaiveDate> = None;

        for record in parser::parse_records(reader)? {
            session.submit_answer(&record.question, &record.answer)?;
            answers_applied += 1;

            if let Some(stamp) = record.recorded_at {
                let date = stamp.date();
                recorded_on = Some(match recorded_on {
                    Some(existing) if existing <= date => existing,
                    _ => date,
                });
            }
        }

        Ok(TranscriptImport {
            session,
            answers_applied,
            recorded_on,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::triage::domain::AnswerValue;
    use chrono::NaiveDate;
    use std::io::Cursor;

    #[test]
    fn parse_datetime_supports_rfc3339_and_date_strings() {
        let rfc = parser::parse_datetime_for_tests("2025-11-03T09:30:00Z").expect("parse rfc");
        assert_eq!(
            rfc,
            NaiveDate::from_ymd_opt(2025, 11, 3)
                .unwrap()
                .and_hms_opt(9, 30, 0)
                .unwrap()
        );

        let date = parser::parse_datetime_for_tests("2025-11-05").expect("parse date");
        assert_eq!(
            date,
            NaiveDate::from_ymd_opt(2025, 11, 5)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );

        assert!(parser::parse_datetime_for_tests("  ").is_none());
        assert!(parser::parse_datetime_for_tests("not-a-date").is_none());
    }

    #[test]
    fn importer_replays_rows_in_order() {
        let csv = "Question,Answer,Recorded At\n\
age,10,2025-11-03T09:30:00Z\n\
sex,male,2025-11-03T09:31:00Z\n\
bleeding_site,joint,2025-11-03T09:32:00Z\n";

        let import = TranscriptImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(import.answers_applied, 3);
        assert_eq!(
            import.recorded_on,
            NaiveDate::from_ymd_opt(2025, 11, 3)
        );
        assert_eq!(import.session.position(), 3);
        assert_eq!(import.session.score_for("hemophilia_a"), Some(10));
    }

    #[test]
    fn importer_accepts_rows_without_timestamps() {
        let csv = "Question,Answer\nage,34\nsex,female\n";

        let import = TranscriptImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(import.answers_applied, 2);
        assert!(import.recorded_on.is_none());
    }

    #[test]
    fn unparsable_answers_replay_as_unknown() {
        let csv = "Question,Answer\nage,unsure\n";

        let import = TranscriptImporter::from_reader(Cursor::new(csv)).expect("import succeeds");

        assert_eq!(
            import.session.answers().get("age"),
            Some(&AnswerValue::Unknown)
        );
        assert_eq!(import.session.position(), 1);
    }

    #[test]
    fn out_of_order_rows_abort_the_import() {
        let csv = "Question,Answer\nsex,male\n";

        let error =
            TranscriptImporter::from_reader(Cursor::new(csv)).expect_err("expected rejection");

        match error {
            TranscriptImportError::Triage(_) => {}
            other => panic!("expected triage error, got {other:?}"),
        }
    }

    #[test]
    fn from_path_propagates_io_errors() {
        let error = TranscriptImporter::from_path("./does-not-exist.csv")
            .expect_err("expected io error");

        match error {
            TranscriptImportError::Io(_) => {}
            other => panic!("expected io error, got {other:?}"),
        }
    }
}
