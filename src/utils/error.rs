use thiserror::Error;

#[derive(Error, Debug)]
pub enum BoardError {
    #[error("Fetch failed: {0}")]
    FetchError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Pattern compilation error: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Render error: {message}")]
    RenderError { message: String },

    #[error("Output formatting error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Io,
    Configuration,
    Output,
    Internal,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl BoardError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BoardError::FetchError(_) => ErrorCategory::Network,
            BoardError::IoError(_) => ErrorCategory::Io,
            BoardError::ConfigValidationError { .. }
            | BoardError::InvalidConfigValueError { .. }
            | BoardError::MissingConfigError { .. } => ErrorCategory::Configuration,
            BoardError::SerializationError(_)
            | BoardError::CsvError(_)
            | BoardError::RenderError { .. }
            | BoardError::FormatError(_) => ErrorCategory::Output,
            BoardError::PatternError(_) => ErrorCategory::Internal,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Io | ErrorCategory::Configuration | ErrorCategory::Output => {
                ErrorSeverity::High
            }
            ErrorCategory::Internal => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BoardError::FetchError(e) if e.is_timeout() => {
                "The source did not answer in time; raise source.timeout_seconds or check the host"
            }
            BoardError::FetchError(e) if e.is_status() => {
                "The source URL answered with an error status; check that the document exists"
            }
            BoardError::FetchError(_) => "Check network connectivity and the source URL",
            BoardError::IoError(_) => "Check that the source file exists and the output path is writable",
            BoardError::SerializationError(_)
            | BoardError::CsvError(_)
            | BoardError::FormatError(_) => {
                "Retry with fewer output formats to isolate the failing one"
            }
            BoardError::PatternError(_) => "This is a bug in the parser patterns; please report it",
            BoardError::ConfigValidationError { .. }
            | BoardError::InvalidConfigValueError { .. }
            | BoardError::MissingConfigError { .. } => {
                "Review the command line flags or the TOML configuration file"
            }
            BoardError::RenderError { .. } => "Check the [render] section of the configuration",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            BoardError::FetchError(_) => format!("Could not fetch the curriculum: {}", self),
            BoardError::IoError(_) => format!("File access failed: {}", self),
            BoardError::MissingConfigError { field } => {
                format!("Missing configuration value: {}", field)
            }
            BoardError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BoardError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = BoardError::MissingConfigError {
            field: "source.location".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(
            err.user_friendly_message(),
            "Missing configuration value: source.location"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "curriculum.md");
        let err: BoardError = io.into();
        assert_eq!(err.category(), ErrorCategory::Io);
        assert!(err.to_string().contains("curriculum.md"));
    }
}
