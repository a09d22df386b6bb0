use super::domain::Subject;
use serde::Serialize;

/// One admitted applicant as presented in a department roster.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdmittedEntry {
    pub name: String,
    pub score: f64,
    /// Preference round in which the seat was granted (0 = first choice).
    pub round: usize,
}

impl AdmittedEntry {
    /// Composite score with one decimal place, as printed on result lists.
    pub fn score_label(&self) -> String {
        format!("{:.1}", self.score)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DepartmentRoster {
    pub name: String,
    pub subjects: Vec<Subject>,
    pub capacity: usize,
    pub admitted: Vec<AdmittedEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdmissionTotals {
    pub applicants: usize,
    pub admitted: usize,
    pub unassigned: usize,
    pub admitted_per_round: Vec<usize>,
}

/// Final result of a run: departments in name order, each roster ranked.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdmissionOutcome {
    pub departments: Vec<DepartmentRoster>,
    /// Applicants who finished every round without a seat, by name.
    pub unassigned: Vec<String>,
    pub totals: AdmissionTotals,
}

impl AdmissionOutcome {
    pub fn department(&self, name: &str) -> Option<&DepartmentRoster> {
        self.departments.iter().find(|roster| roster.name == name)
    }

    /// Admitted names for a department, in roster order.
    pub fn admitted_names(&self, department: &str) -> Vec<&str> {
        self.department(department)
            .map(|roster| {
                roster
                    .admitted
                    .iter()
                    .map(|entry| entry.name.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }
}
