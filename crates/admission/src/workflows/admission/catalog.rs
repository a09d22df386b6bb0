use super::domain::{Subject, UnknownSubject};
use crate::config::DEFAULT_ROUNDS;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;

/// Static description of a department: its name and the exams it scores on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentSpec {
    pub name: String,
    pub subjects: Vec<Subject>,
}

impl DepartmentSpec {
    pub fn new(name: impl Into<String>, subjects: &[Subject]) -> Self {
        Self {
            name: name.into(),
            subjects: subjects.to_vec(),
        }
    }
}

/// Ordered set of departments. Declaration order is the order departments
/// are visited within a selection round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentCatalog {
    departments: Vec<DepartmentSpec>,
}

impl DepartmentCatalog {
    pub fn new(departments: Vec<DepartmentSpec>) -> Result<Self, CatalogError> {
        if departments.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = HashSet::new();
        for department in &departments {
            if department.subjects.is_empty() {
                return Err(CatalogError::EmptySubjects {
                    department: department.name.clone(),
                });
            }
            if !seen.insert(department.name.as_str()) {
                return Err(CatalogError::DuplicateDepartment {
                    department: department.name.clone(),
                });
            }
        }

        Ok(Self { departments })
    }

    /// The five faculties the admission office has always run with.
    pub fn standard() -> Self {
        Self {
            departments: vec![
                DepartmentSpec::new("Physics", &[Subject::Physics, Subject::Math]),
                DepartmentSpec::new("Chemistry", &[Subject::Chemistry]),
                DepartmentSpec::new("Mathematics", &[Subject::Math]),
                DepartmentSpec::new("Engineering", &[Subject::ComputerScience, Subject::Math]),
                DepartmentSpec::new("Biotech", &[Subject::Chemistry, Subject::Physics]),
            ],
        }
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    /// Reads a JSON array of `{"name": ..., "subjects": [...]}` entries.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let entries: Vec<CatalogEntry> = serde_json::from_reader(reader)?;
        let mut departments = Vec::with_capacity(entries.len());

        for entry in entries {
            let subjects = entry
                .subjects
                .iter()
                .map(|raw| raw.parse::<Subject>())
                .collect::<Result<Vec<_>, UnknownSubject>>()
                .map_err(|source| CatalogError::UnknownSubject {
                    department: entry.name.clone(),
                    source,
                })?;
            departments.push(DepartmentSpec {
                name: entry.name.trim().to_string(),
                subjects,
            });
        }

        Self::new(departments)
    }

    pub fn departments(&self) -> &[DepartmentSpec] {
        &self.departments
    }
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    name: String,
    subjects: Vec<String>,
}

/// Everything the engine is parameterised by for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissionPlan {
    pub catalog: DepartmentCatalog,
    /// Seats per department, shared by every department.
    pub capacity: usize,
    /// Preference positions considered, one selection round each.
    pub rounds: usize,
}

impl AdmissionPlan {
    pub fn new(catalog: DepartmentCatalog, capacity: usize) -> Self {
        Self {
            catalog,
            capacity,
            rounds: DEFAULT_ROUNDS,
        }
    }

    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }

    pub fn standard(capacity: usize) -> Self {
        Self::new(DepartmentCatalog::standard(), capacity)
    }
}

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Empty,
    EmptySubjects {
        department: String,
    },
    DuplicateDepartment {
        department: String,
    },
    UnknownSubject {
        department: String,
        source: UnknownSubject,
    },
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::Io(err) => write!(f, "failed to read department catalog: {}", err),
            CatalogError::Json(err) => write!(f, "invalid department catalog JSON: {}", err),
            CatalogError::Empty => write!(f, "department catalog lists no departments"),
            CatalogError::EmptySubjects { department } => {
                write!(f, "department '{}' has no scoring subjects", department)
            }
            CatalogError::DuplicateDepartment { department } => {
                write!(f, "department '{}' is declared more than once", department)
            }
            CatalogError::UnknownSubject { department, source } => {
                write!(f, "department '{}': {}", department, source)
            }
        }
    }
}

impl std::error::Error for CatalogError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CatalogError::Io(err) => Some(err),
            CatalogError::Json(err) => Some(err),
            CatalogError::UnknownSubject { source, .. } => Some(source),
            CatalogError::Empty
            | CatalogError::EmptySubjects { .. }
            | CatalogError::DuplicateDepartment { .. } => None,
        }
    }
}

impl From<std::io::Error> for CatalogError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for CatalogError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}
