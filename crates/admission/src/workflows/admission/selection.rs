use super::domain::{AdmissionStatus, Applicant, Department, Seat};
use tracing::debug;

/// Runs the preference rounds over already ranked pools.
///
/// Round `r` visits every department in declaration order and walks its pool
/// from the top. A candidate is admitted when still unassigned and their
/// `r`-th preference names the department; everyone else is skipped but left
/// in the pool for later rounds. Scanning a department stops as soon as it is
/// full. Returns how many applicants were admitted in each round.
pub(crate) fn select_candidates(
    departments: &mut [Department],
    applicants: &mut [Applicant],
    rounds: usize,
) -> Vec<usize> {
    let mut admitted_per_round = Vec::with_capacity(rounds);

    for round in 0..rounds {
        let mut admitted_this_round = 0;

        for department in departments.iter_mut() {
            for &id in &department.pool {
                if department.is_full() {
                    break;
                }

                let applicant = &mut applicants[id.0];
                if applicant.is_admitted()
                    || applicant.preference(round) != Some(department.name.as_str())
                {
                    continue;
                }

                applicant.status = AdmissionStatus::Admitted {
                    department: department.name.clone(),
                    round,
                };
                department.admitted.push(Seat {
                    applicant: id,
                    round,
                });
                admitted_this_round += 1;

                debug!(
                    applicant = %applicant.name,
                    department = %department.name,
                    round,
                    "applicant admitted"
                );
            }
        }

        admitted_per_round.push(admitted_this_round);
    }

    admitted_per_round
}
