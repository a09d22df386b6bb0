//! Multi-round admission allocation.
//!
//! Applicants are held in one registry and referenced by [`ApplicantId`] from
//! every department pool, so admitting someone is a single status change that
//! every pool observes.

pub mod catalog;
pub mod domain;
pub mod engine;
pub mod outcome;
pub mod ranking;
pub(crate) mod selection;

pub use catalog::{AdmissionPlan, CatalogError, DepartmentCatalog, DepartmentSpec};
pub use domain::{
    AdmissionStatus, Applicant, ApplicantId, ApplicantRecord, Department, ExamScores, Seat,
    Subject, UnknownSubject,
};
pub use engine::{AdmissionEngine, AllocationError};
pub use outcome::{AdmissionOutcome, AdmissionTotals, AdmittedEntry, DepartmentRoster};
