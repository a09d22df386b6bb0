//! Applicant intake: turns the admission office's text export into typed
//! records and reads the shared capacity limit.

mod normalizer;
mod parser;

use crate::workflows::admission::ApplicantRecord;
use std::io::{BufRead, Read};
use std::path::Path;
use tracing::info;

#[derive(Debug)]
pub enum IntakeError {
    Io(std::io::Error),
    Csv(csv::Error),
    MissingField {
        line: u64,
        field: &'static str,
    },
    InvalidScore {
        line: u64,
        field: &'static str,
        value: String,
    },
    InvalidCapacity {
        value: String,
    },
}

impl std::fmt::Display for IntakeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IntakeError::Io(err) => write!(f, "failed to read applicant list: {}", err),
            IntakeError::Csv(err) => write!(f, "invalid applicant record: {}", err),
            IntakeError::MissingField { line, field } => {
                write!(f, "line {}: missing {}", line, field)
            }
            IntakeError::InvalidScore { line, field, value } => {
                write!(f, "line {}: {} score '{}' is not a number", line, field, value)
            }
            IntakeError::InvalidCapacity { value } => write!(
                f,
                "capacity limit '{}' is not a non-negative integer",
                value
            ),
        }
    }
}

impl std::error::Error for IntakeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            IntakeError::Io(err) => Some(err),
            IntakeError::Csv(err) => Some(err),
            IntakeError::MissingField { .. }
            | IntakeError::InvalidScore { .. }
            | IntakeError::InvalidCapacity { .. } => None,
        }
    }
}

impl From<std::io::Error> for IntakeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for IntakeError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

pub struct ApplicantIntake;

impl ApplicantIntake {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Vec<ApplicantRecord>, IntakeError> {
        let path = path.as_ref();
        let file = std::fs::File::open(path)?;
        let records = Self::from_reader(file)?;
        info!(path = %path.display(), applicants = records.len(), "applicant list loaded");
        Ok(records)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Vec<ApplicantRecord>, IntakeError> {
        parser::parse_records(reader)
    }
}

/// Parses a capacity limit. Zero is a valid limit.
pub fn parse_capacity(raw: &str) -> Result<usize, IntakeError> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| IntakeError::InvalidCapacity {
            value: raw.trim().to_string(),
        })
}

/// Reads the capacity limit as the first whitespace separated token of the
/// input, the way the admission office types it at the prompt.
pub fn read_capacity<R: BufRead>(reader: R) -> Result<usize, IntakeError> {
    for line in reader.lines() {
        let line = line?;
        if let Some(token) = line.split_whitespace().next() {
            return parse_capacity(token);
        }
    }

    Err(IntakeError::InvalidCapacity {
        value: String::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn capacity_accepts_zero() {
        assert_eq!(parse_capacity("0").expect("zero is valid"), 0);
        assert_eq!(parse_capacity(" 12\n").expect("trimmed"), 12);
    }

    #[test]
    fn capacity_rejects_negative_and_text() {
        assert!(matches!(
            parse_capacity("-3"),
            Err(IntakeError::InvalidCapacity { .. })
        ));
        assert!(matches!(
            parse_capacity("many"),
            Err(IntakeError::InvalidCapacity { .. })
        ));
    }

    #[test]
    fn read_capacity_skips_blank_lines() {
        let input = Cursor::new("\n   \n 4 ignored\n");
        assert_eq!(read_capacity(input).expect("capacity read"), 4);
    }

    #[test]
    fn read_capacity_fails_on_empty_input() {
        let err = read_capacity(Cursor::new("")).expect_err("no capacity");
        assert!(matches!(err, IntakeError::InvalidCapacity { .. }));
    }

    #[test]
    fn from_path_reports_missing_file() {
        let err = ApplicantIntake::from_path("definitely/not/here.txt").expect_err("missing");
        assert!(matches!(err, IntakeError::Io(_)));
    }
}
