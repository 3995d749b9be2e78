use crate::config::ConfigError;
use crate::dataset::DatasetError;
use crate::render::RenderError;
use crate::telemetry::TelemetryError;
use std::fmt;

/// Process exit status for a run that could not obtain its input tables.
pub const EXIT_MISSING_INPUT: i32 = 2;
/// Process exit status for every other failure.
pub const EXIT_FAILURE: i32 = 1;

#[derive(Debug)]
pub enum AppError {
    Config(ConfigError),
    Telemetry(TelemetryError),
    Dataset(DatasetError),
    Render(RenderError),
    Io(std::io::Error),
}

impl AppError {
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::Dataset(err) if err.is_missing_input() => EXIT_MISSING_INPUT,
            _ => EXIT_FAILURE,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Config(err) => write!(f, "configuration error: {}", err),
            AppError::Telemetry(err) => write!(f, "telemetry error: {}", err),
            AppError::Dataset(err) => write!(f, "input error: {}", err),
            AppError::Render(err) => write!(f, "render error: {}", err),
            AppError::Io(err) => write!(f, "io error: {}", err),
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Config(err) => Some(err),
            AppError::Telemetry(err) => Some(err),
            AppError::Dataset(err) => Some(err),
            AppError::Render(err) => Some(err),
            AppError::Io(err) => Some(err),
        }
    }
}

impl From<ConfigError> for AppError {
    fn from(value: ConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TelemetryError> for AppError {
    fn from(value: TelemetryError) -> Self {
        Self::Telemetry(value)
    }
}

impl From<DatasetError> for AppError {
    fn from(value: DatasetError) -> Self {
        Self::Dataset(value)
    }
}

impl From<RenderError> for AppError {
    fn from(value: RenderError) -> Self {
        Self::Render(value)
    }
}

impl From<std::io::Error> for AppError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn missing_input_has_its_own_exit_code() {
        let missing = Dataset::from_dir("./does-not-exist").expect_err("missing tables");
        let error = AppError::from(missing);
        assert_eq!(error.exit_code(), EXIT_MISSING_INPUT);
        assert!(error.to_string().starts_with("input error: missing job postings table"));
    }

    #[test]
    fn other_failures_use_generic_exit_code() {
        let error = AppError::from(std::io::Error::other("disk full"));
        assert_eq!(error.exit_code(), EXIT_FAILURE);
    }
}
