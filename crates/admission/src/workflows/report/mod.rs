//! Presentation of an [`AdmissionOutcome`]: the plain-text roster listing,
//! per-department result files and a JSON document.

mod files;

pub use files::{result_file_name, write_department_files};

use crate::workflows::admission::{AdmissionOutcome, DepartmentRoster};
use std::io::{self, Write};

/// Writes each department name followed by `Name Score` lines and a blank
/// separator line.
pub fn render_text<W: Write>(outcome: &AdmissionOutcome, writer: &mut W) -> io::Result<()> {
    for roster in &outcome.departments {
        writeln!(writer, "{}", roster.name)?;
        write_roster_lines(roster, writer)?;
        writeln!(writer)?;
    }
    Ok(())
}

pub fn render_json(outcome: &AdmissionOutcome) -> serde_json::Result<String> {
    serde_json::to_string_pretty(outcome)
}

pub(crate) fn write_roster_lines<W: Write>(
    roster: &DepartmentRoster,
    writer: &mut W,
) -> io::Result<()> {
    for entry in &roster.admitted {
        writeln!(writer, "{} {}", entry.name, entry.score_label())?;
    }
    Ok(())
}
