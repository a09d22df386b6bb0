use super::domain::{Applicant, ApplicantId, Subject};
use std::cmp::Ordering;

/// Orders two applicants for a department: higher composite score first,
/// then name ascending, then registry id so the order stays total even for
/// duplicate names.
pub(crate) fn compare(
    applicants: &[Applicant],
    subjects: &[Subject],
    left: ApplicantId,
    right: ApplicantId,
) -> Ordering {
    let a = &applicants[left.0];
    let b = &applicants[right.0];

    b.score(subjects)
        .total_cmp(&a.score(subjects))
        .then_with(|| a.name.cmp(&b.name))
        .then_with(|| left.cmp(&right))
}

/// Sorts `ids` into ranking order for the given subject set.
pub fn rank(ids: &mut [ApplicantId], applicants: &[Applicant], subjects: &[Subject]) {
    ids.sort_by(|left, right| compare(applicants, subjects, *left, *right));
}
