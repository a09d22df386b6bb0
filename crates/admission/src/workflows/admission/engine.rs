use super::catalog::AdmissionPlan;
use super::domain::{Applicant, ApplicantId, ApplicantRecord, Department};
use super::outcome::{AdmissionOutcome, AdmissionTotals, AdmittedEntry, DepartmentRoster};
use super::{ranking, selection};
use std::collections::HashMap;
use tracing::{debug, info};

/// Input that cannot be allocated.
#[derive(Debug, thiserror::Error)]
pub enum AllocationError {
    #[error("applicant '{applicant}' lists unknown department '{department}'")]
    UnknownDepartment {
        applicant: String,
        department: String,
    },
}

/// Owns the departments and the applicant registry for one batch run.
pub struct AdmissionEngine {
    departments: Vec<Department>,
    department_index: HashMap<String, usize>,
    applicants: Vec<Applicant>,
    rounds: usize,
}

impl AdmissionEngine {
    /// Builds the engine, rejecting any preference that names a department
    /// outside the plan's catalog.
    pub fn new(
        plan: &AdmissionPlan,
        records: Vec<ApplicantRecord>,
    ) -> Result<Self, AllocationError> {
        let departments: Vec<Department> = plan
            .catalog
            .departments()
            .iter()
            .map(|spec| Department::new(spec.name.clone(), spec.subjects.clone(), plan.capacity))
            .collect();
        let department_index = index_departments(&departments);

        let mut applicants = Vec::with_capacity(records.len());
        for record in records {
            if let Some(unknown) = record
                .preferences
                .iter()
                .find(|name| !department_index.contains_key(name.as_str()))
            {
                return Err(AllocationError::UnknownDepartment {
                    applicant: record.name.clone(),
                    department: unknown.clone(),
                });
            }
            applicants.push(Applicant::new(record));
        }

        Ok(Self {
            departments,
            department_index,
            applicants,
            rounds: plan.rounds,
        })
    }

    /// Runs segmentation, pool ranking, selection and final ordering.
    pub fn run(mut self) -> AdmissionOutcome {
        info!(
            applicants = self.applicants.len(),
            departments = self.departments.len(),
            rounds = self.rounds,
            "starting admission run"
        );

        self.segment();
        self.rank_pools();
        let admitted_per_round =
            selection::select_candidates(&mut self.departments, &mut self.applicants, self.rounds);
        self.finalize();

        let outcome = self.outcome(admitted_per_round);
        info!(
            admitted = outcome.totals.admitted,
            unassigned = outcome.totals.unassigned,
            "admission run complete"
        );
        outcome
    }

    /// Places every applicant in the pool of each department they listed.
    /// A department listed twice puts the applicant in its pool twice.
    fn segment(&mut self) {
        for (position, applicant) in self.applicants.iter().enumerate() {
            for preference in &applicant.preferences {
                if let Some(&index) = self.department_index.get(preference) {
                    self.departments[index].add_candidate(ApplicantId(position));
                }
            }
        }

        for department in &self.departments {
            debug!(
                department = %department.name,
                candidates = department.pool.len(),
                "pool segmented"
            );
        }
    }

    fn rank_pools(&mut self) {
        for department in &mut self.departments {
            ranking::rank(&mut department.pool, &self.applicants, &department.subjects);
        }
    }

    /// Re-ranks admitted lists and puts departments in name order.
    fn finalize(&mut self) {
        for department in &mut self.departments {
            let subjects = &department.subjects;
            department.admitted.sort_by(|left, right| {
                ranking::compare(&self.applicants, subjects, left.applicant, right.applicant)
            });
        }
        self.departments.sort_by(|left, right| left.name.cmp(&right.name));
    }

    fn outcome(&self, admitted_per_round: Vec<usize>) -> AdmissionOutcome {
        let departments = self
            .departments
            .iter()
            .map(|department| DepartmentRoster {
                name: department.name.clone(),
                subjects: department.subjects.clone(),
                capacity: department.limit,
                admitted: department
                    .admitted
                    .iter()
                    .map(|seat| {
                        let applicant = &self.applicants[seat.applicant.0];
                        AdmittedEntry {
                            name: applicant.name.clone(),
                            score: applicant.score(&department.subjects),
                            round: seat.round,
                        }
                    })
                    .collect(),
            })
            .collect();

        let mut unassigned: Vec<String> = self
            .applicants
            .iter()
            .filter(|applicant| !applicant.is_admitted())
            .map(|applicant| applicant.name.clone())
            .collect();
        unassigned.sort();

        let admitted = self.applicants.len() - unassigned.len();
        AdmissionOutcome {
            departments,
            totals: AdmissionTotals {
                applicants: self.applicants.len(),
                admitted,
                unassigned: unassigned.len(),
                admitted_per_round,
            },
            unassigned,
        }
    }
}

fn index_departments(departments: &[Department]) -> HashMap<String, usize> {
    departments
        .iter()
        .enumerate()
        .map(|(index, department)| (department.name.clone(), index))
        .collect()
}
