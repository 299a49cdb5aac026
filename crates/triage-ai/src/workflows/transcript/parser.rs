use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer};
use std::io::Read;

#[derive(Debug)]
pub(crate) struct TranscriptRecord {
    pub(crate) question: String,
    pub(crate) answer: String,
    pub(crate) recorded_at: Option<NaiveDateTime>,
}

pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<TranscriptRecord>, csv::Error> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for record in csv_reader.deserialize::<TranscriptRow>() {
        let row = record?;
        let recorded_at = row.recorded_at.as_deref().and_then(parse_datetime);

        records.push(TranscriptRecord {
            question: row.question,
            answer: row.answer,
            recorded_at,
        });
    }

    Ok(records)
}

#[derive(Debug, Deserialize)]
struct TranscriptRow {
    #[serde(rename = "Question")]
    question: String,
    #[serde(rename = "Answer", default)]
    answer: String,
    #[serde(
        rename = "Recorded At",
        default,
        deserialize_with = "empty_string_as_none"
    )]
    recorded_at: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

fn parse_datetime(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }

    None
}

#[cfg(test)]
pub(crate) fn parse_datetime_for_tests(value: &str) -> Option<NaiveDateTime> {
    parse_datetime(value)
}
