use std::env;
use std::fmt;
use std::num::ParseIntError;
use std::path::PathBuf;

use crate::analysis::AnalysisConfig;

/// Distinguishes runtime behavior for different stages of deployment.
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
    pub paths: PathConfig,
    pub analysis: AnalysisConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let environment = AppEnvironment::from_str(
            &env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
        );

        let data_dir = env::var("SKILLS_DATA_DIR").unwrap_or_else(|_| "csv_files".to_string());
        let output_dir = env::var("SKILLS_OUTPUT_DIR").unwrap_or_else(|_| "assets".to_string());

        let defaults = AnalysisConfig::default();
        let analysis = AnalysisConfig {
            job_title: env::var("SKILLS_JOB_TITLE").unwrap_or(defaults.job_title),
            demand_limit: usize_var("SKILLS_DEMAND_LIMIT")?.unwrap_or(defaults.demand_limit),
            pay_limit: usize_var("SKILLS_PAY_LIMIT")?.unwrap_or(defaults.pay_limit),
            pay_min_postings: usize_var("SKILLS_PAY_MIN_POSTINGS")?.or(defaults.pay_min_postings),
            optimal_limit: usize_var("SKILLS_OPTIMAL_LIMIT")?.unwrap_or(defaults.optimal_limit),
            optimal_min_demand: usize_var("SKILLS_OPTIMAL_MIN_DEMAND")?
                .unwrap_or(defaults.optimal_min_demand),
        };

        let log_level = env::var("APP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            environment,
            paths: PathConfig {
                data_dir: PathBuf::from(data_dir),
                output_dir: PathBuf::from(output_dir),
            },
            analysis,
            telemetry: TelemetryConfig { log_level },
        })
    }
}

fn usize_var(name: &'static str) -> Result<Option<usize>, ConfigError> {
    match env::var(name) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse::<usize>()
            .map(Some)
            .map_err(|source| ConfigError::InvalidNumber {
                variable: name,
                value: raw,
                source,
            }),
        Err(_) => Ok(None),
    }
}

/// Where the source tables are read from and where charts are written.
#[derive(Debug, Clone)]
pub struct PathConfig {
    pub data_dir: PathBuf,
    pub output_dir: PathBuf,
}

/// Tracing controls.
#[derive(Debug, Clone)]
pub struct TelemetryConfig {
    pub log_level: String,
}

#[derive(Debug)]
pub enum ConfigError {
    InvalidNumber {
        variable: &'static str,
        value: String,
        source: ParseIntError,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidNumber {
                variable, value, ..
            } => write!(
                f,
                "{variable} must be a non-negative integer (got '{value}')"
            ),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::InvalidNumber { source, .. } => Some(source),
        }
    }
}
