use super::write_roster_lines;
use crate::workflows::admission::AdmissionOutcome;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// `Physics` -> `physics.txt`.
pub fn result_file_name(department: &str) -> String {
    format!("{}.txt", department.to_lowercase())
}

/// Writes one result file per department into `dir`, replacing earlier
/// results. Returns the paths written, in department order.
pub fn write_department_files(
    outcome: &AdmissionOutcome,
    dir: &Path,
) -> io::Result<Vec<PathBuf>> {
    std::fs::create_dir_all(dir)?;
    let mut written = Vec::with_capacity(outcome.departments.len());

    for roster in &outcome.departments {
        let path = dir.join(result_file_name(&roster.name));
        let mut writer = BufWriter::new(File::create(&path)?);
        write_roster_lines(roster, &mut writer)?;
        writeln!(writer)?;
        writer.flush()?;

        debug!(path = %path.display(), admitted = roster.admitted.len(), "result file written");
        written.push(path);
    }

    Ok(written)
}
