use std::env;
use std::fmt;
use std::path::PathBuf;

/// Number of preference rounds the standard admission campaign runs.
pub const DEFAULT_ROUNDS: usize = 3;

/// Distinguishes runtime behavior for different stages of the tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnvironment {
    Development,
    Test,
    Production,
}

impl AppEnvironment {
    fn from_str(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "prod" | "production" => Self::Production,
            "test" | "ci" => Self::Test,
            _ => Self::Development,
        }
    }
}

/// Top-level configuration for the application.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: AppEnvironment,
    pub admission: AdmissionConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let applicants_path = env::var("ADMISSION_APPLICANTS")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("applicants.txt"));

        let capacity = match env::var("ADMISSION_CAPACITY") {
            Ok(raw) => Some(
                raw.trim()
                    .parse::<usize>()
                    .map_err(|_| ConfigError::InvalidCapacity { value: raw })?,
            ),
            Err(_) => None,
        };

        let rounds = match env::var("ADMISSION_ROUNDS") {
            Ok(raw) => match raw.trim().parse::<usize>() {
                Ok(rounds) if rounds > 0 => rounds,
                _ => return Err(ConfigError::InvalidRounds { value: raw }),
            },
            Err(_) => DEFAULT_ROUNDS,
        };

        let output_dir = env::var("ADMISSION_OUTPUT_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("."));

        let catalog_path = env::var("ADMISSION_CATALOG").ok().map(PathBuf::from);

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            admission: AdmissionConfig {
                applicants_path,
                capacity,
                rounds,
                output_dir,
                catalog_path,
            },
            telemetry: TelemetryConfig { log_level },
        })
    }
}

/// Inputs and outputs of one admission run.
#[derive(Debug, Clone)]
pub struct AdmissionConfig {
    pub applicants_path: PathBuf,
    /// Shared seat limit; read from stdin when neither config nor flags set it.
    pub capacity: Option<usize>,
    pub rounds: usize,
    pub output_dir: PathBuf,
    /// JSON department catalog; the standard catalog is used when absent.
    pub catalog_path: Option<PathBuf>,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidCapacity { value: String },
    InvalidRounds { value: String },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidCapacity { value } => write!(
                f,
                "ADMISSION_CAPACITY must be a non-negative integer (got '{value}')"
            ),
            ConfigError::InvalidRounds { value } => write!(
                f,
                "ADMISSION_ROUNDS must be a positive integer (got '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {}
