use admission::config::AppConfig;
use admission::error::AppError;
use admission::telemetry;
use admission::workflows::admission::{AdmissionEngine, AdmissionPlan, DepartmentCatalog};
use admission::workflows::intake::{parse_capacity, read_capacity, ApplicantIntake};
use admission::workflows::report::{render_json, render_text, write_department_files};
use clap::Args;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args, Debug, Default)]
pub(crate) struct AllocateArgs {
    /// Applicant list to allocate (defaults to ADMISSION_APPLICANTS or applicants.txt)
    #[arg(long)]
    pub(crate) applicants: Option<PathBuf>,
    /// Seats per department; read from stdin when neither this nor ADMISSION_CAPACITY is set
    #[arg(long, value_parser = parse_capacity_arg)]
    pub(crate) capacity: Option<usize>,
    /// Number of preference rounds to run
    #[arg(long, value_parser = parse_rounds_arg)]
    pub(crate) rounds: Option<usize>,
    /// Directory receiving the per-department result files
    #[arg(long)]
    pub(crate) output_dir: Option<PathBuf>,
    /// JSON department catalog replacing the standard five departments
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
    /// Print the outcome as JSON instead of the plain roster listing
    #[arg(long)]
    pub(crate) json: bool,
    /// Skip writing the per-department result files
    #[arg(long)]
    pub(crate) no_files: bool,
}

#[derive(Args, Debug)]
pub(crate) struct CatalogArgs {
    /// JSON department catalog to validate and print
    #[arg(long)]
    pub(crate) catalog: Option<PathBuf>,
}

fn parse_capacity_arg(raw: &str) -> Result<usize, String> {
    parse_capacity(raw).map_err(|err| err.to_string())
}

fn parse_rounds_arg(raw: &str) -> Result<usize, String> {
    match raw.trim().parse::<usize>() {
        Ok(rounds) if rounds > 0 => Ok(rounds),
        _ => Err(format!("'{raw}' is not a positive number of rounds")),
    }
}

pub(crate) fn run_allocation(mut args: AllocateArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(path) = args.applicants.take() {
        config.admission.applicants_path = path;
    }
    if let Some(capacity) = args.capacity.take() {
        config.admission.capacity = Some(capacity);
    }
    if let Some(rounds) = args.rounds.take() {
        config.admission.rounds = rounds;
    }
    if let Some(dir) = args.output_dir.take() {
        config.admission.output_dir = dir;
    }
    if let Some(path) = args.catalog.take() {
        config.admission.catalog_path = Some(path);
    }

    telemetry::init(&config.telemetry)?;

    let catalog = load_catalog(config.admission.catalog_path.as_deref())?;
    let capacity = match config.admission.capacity {
        Some(capacity) => capacity,
        None => read_capacity(io::stdin().lock())?,
    };
    let records = ApplicantIntake::from_path(&config.admission.applicants_path)?;

    let plan = AdmissionPlan::new(catalog, capacity).with_rounds(config.admission.rounds);
    let outcome = AdmissionEngine::new(&plan, records)?.run();

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if args.json {
        writeln!(out, "{}", render_json(&outcome)?)?;
    } else {
        render_text(&outcome, &mut out)?;
    }
    out.flush()?;

    if !args.no_files {
        let written = write_department_files(&outcome, &config.admission.output_dir)?;
        info!(
            ?config.environment,
            files = written.len(),
            dir = %config.admission.output_dir.display(),
            "admission results saved"
        );
    }

    Ok(())
}

pub(crate) fn show_catalog(args: CatalogArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;
    if let Some(path) = args.catalog {
        config.admission.catalog_path = Some(path);
    }

    let catalog = load_catalog(config.admission.catalog_path.as_deref())?;
    println!("{}", serde_json::to_string_pretty(&catalog)?);
    Ok(())
}

fn load_catalog(path: Option<&Path>) -> Result<DepartmentCatalog, AppError> {
    match path {
        Some(path) => Ok(DepartmentCatalog::from_path(path)?),
        None => Ok(DepartmentCatalog::standard()),
    }
}
