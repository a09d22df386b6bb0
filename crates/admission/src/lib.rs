//! Admission allocation engine.
//!
//! Applicants rank departments and sit a fixed set of exams; departments admit
//! the best-scoring candidates round by round until their shared capacity is
//! used up. The `workflows` tree holds the engine itself plus the intake and
//! report collaborators around it.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
