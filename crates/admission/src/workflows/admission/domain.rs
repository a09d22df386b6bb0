use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Exams every applicant sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subject {
    Physics,
    Chemistry,
    Math,
    ComputerScience,
    Special,
}

impl Subject {
    pub const ALL: [Subject; 5] = [
        Subject::Physics,
        Subject::Chemistry,
        Subject::Math,
        Subject::ComputerScience,
        Subject::Special,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Subject::Physics => "physics",
            Subject::Chemistry => "chemistry",
            Subject::Math => "math",
            Subject::ComputerScience => "computer science",
            Subject::Special => "special",
        }
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSubject(pub String);

impl fmt::Display for UnknownSubject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown subject '{}'", self.0)
    }
}

impl std::error::Error for UnknownSubject {}

impl FromStr for Subject {
    type Err = UnknownSubject;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value
            .trim()
            .to_ascii_lowercase()
            .replace(['-', '_'], " ");
        match normalized.as_str() {
            "physics" => Ok(Subject::Physics),
            "chemistry" => Ok(Subject::Chemistry),
            "math" | "mathematics" => Ok(Subject::Math),
            "computer science" => Ok(Subject::ComputerScience),
            "special" => Ok(Subject::Special),
            _ => Err(UnknownSubject(value.to_string())),
        }
    }
}

/// Exam results in the fixed intake order.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ExamScores {
    pub physics: f64,
    pub chemistry: f64,
    pub math: f64,
    pub computer_science: f64,
    pub special: f64,
}

impl ExamScores {
    pub fn get(&self, subject: Subject) -> f64 {
        match subject {
            Subject::Physics => self.physics,
            Subject::Chemistry => self.chemistry,
            Subject::Math => self.math,
            Subject::ComputerScience => self.computer_science,
            Subject::Special => self.special,
        }
    }
}

/// Applicant record as handed over by the intake collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    pub name: String,
    pub scores: ExamScores,
    /// Department names, first choice first.
    pub preferences: Vec<String>,
}

/// Stable index into the engine's applicant registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ApplicantId(pub usize);

/// Where an applicant stands in the allocation. Moves from `Unassigned` to
/// `Admitted` at most once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum AdmissionStatus {
    Unassigned,
    Admitted { department: String, round: usize },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Applicant {
    pub name: String,
    pub scores: ExamScores,
    pub preferences: Vec<String>,
    pub status: AdmissionStatus,
}

impl Applicant {
    pub fn new(record: ApplicantRecord) -> Self {
        Self {
            name: record.name,
            scores: record.scores,
            preferences: record.preferences,
            status: AdmissionStatus::Unassigned,
        }
    }

    /// Composite score for a department: the mean of the listed subjects,
    /// raised to the special exam result when that is higher.
    pub fn score(&self, subjects: &[Subject]) -> f64 {
        let special = self.scores.special;
        if subjects.is_empty() {
            return special;
        }

        let total: f64 = subjects
            .iter()
            .map(|subject| self.scores.get(*subject))
            .sum();
        let mean = total / subjects.len() as f64;

        if special > mean {
            special
        } else {
            mean
        }
    }

    pub fn is_admitted(&self) -> bool {
        matches!(self.status, AdmissionStatus::Admitted { .. })
    }

    /// Preference for the given round, if the applicant listed that many.
    pub fn preference(&self, round: usize) -> Option<&str> {
        self.preferences.get(round).map(String::as_str)
    }
}

/// A granted seat: who holds it and in which preference round it was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat {
    pub applicant: ApplicantId,
    pub round: usize,
}

/// A department taking part in the allocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Department {
    pub name: String,
    pub subjects: Vec<Subject>,
    pub limit: usize,
    pub pool: Vec<ApplicantId>,
    pub admitted: Vec<Seat>,
}

impl Department {
    pub fn new(name: impl Into<String>, subjects: Vec<Subject>, limit: usize) -> Self {
        Self {
            name: name.into(),
            subjects,
            limit,
            pool: Vec::new(),
            admitted: Vec::new(),
        }
    }

    pub fn add_candidate(&mut self, id: ApplicantId) {
        self.pool.push(id);
    }

    pub fn is_full(&self) -> bool {
        self.admitted.len() >= self.limit
    }
}
