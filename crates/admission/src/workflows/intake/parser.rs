use super::normalizer::{normalize_decimal, normalize_token};
use super::IntakeError;
use crate::workflows::admission::{ApplicantRecord, ExamScores, Subject};
use std::io::Read;

const NAME_FIELDS: [&str; 2] = ["first name", "last name"];

/// Parses whitespace separated applicant lines:
/// `First Last physics chemistry math computer_science special Dept...`.
pub(crate) fn parse_records<R: Read>(reader: R) -> Result<Vec<ApplicantRecord>, IntakeError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(b' ')
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut records = Vec::new();

    for row in csv_reader.records() {
        let row = row?;
        let line = row.position().map(|position| position.line()).unwrap_or(0);
        let fields: Vec<String> = row
            .iter()
            .map(normalize_token)
            .filter(|field| !field.is_empty())
            .collect();

        if fields.is_empty() {
            continue;
        }

        records.push(parse_fields(line, &fields)?);
    }

    Ok(records)
}

fn parse_fields(line: u64, fields: &[String]) -> Result<ApplicantRecord, IntakeError> {
    for (index, field) in NAME_FIELDS.into_iter().enumerate() {
        if fields.get(index).is_none() {
            return Err(IntakeError::MissingField { line, field });
        }
    }
    let name = format!("{} {}", fields[0], fields[1]);

    let mut values = [0.0_f64; 5];
    for (offset, subject) in Subject::ALL.iter().enumerate() {
        let raw = fields
            .get(NAME_FIELDS.len() + offset)
            .ok_or(IntakeError::MissingField {
                line,
                field: subject.label(),
            })?;
        values[offset] = parse_score(raw).ok_or_else(|| IntakeError::InvalidScore {
            line,
            field: subject.label(),
            value: raw.clone(),
        })?;
    }
    let [physics, chemistry, math, computer_science, special] = values;

    let preferences = fields[NAME_FIELDS.len() + Subject::ALL.len()..].to_vec();

    Ok(ApplicantRecord {
        name,
        scores: ExamScores {
            physics,
            chemistry,
            math,
            computer_science,
            special,
        },
        preferences,
    })
}

fn parse_score(raw: &str) -> Option<f64> {
    normalize_decimal(raw)
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}
