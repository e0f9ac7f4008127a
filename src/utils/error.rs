use thiserror::Error;

#[derive(Error, Debug)]
pub enum SvcError {
    #[error("Invalid input")]
    InvalidInput,

    #[error("Missing API key")]
    MissingApiKey,

    #[error("API request failed")]
    ApiRequestFailed {
        attempts: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Network,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl SvcError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            SvcError::InvalidInput | SvcError::SerializationError(_) => ErrorCategory::Input,
            SvcError::ApiRequestFailed { .. } | SvcError::ApiError(_) => ErrorCategory::Network,
            SvcError::MissingApiKey
            | SvcError::ConfigError { .. }
            | SvcError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            SvcError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            // 網路錯誤可重試
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            SvcError::InvalidInput => "Pass two numeric operands",
            SvcError::MissingApiKey => "Set VIDEO_API_KEY or `api_key` in the config file",
            SvcError::ApiRequestFailed { .. } | SvcError::ApiError(_) => {
                "Check the metadata endpoint and network connectivity, then retry"
            }
            SvcError::SerializationError(_) => "The metadata API returned malformed JSON",
            SvcError::ConfigError { .. } | SvcError::InvalidConfigValueError { .. } => {
                "Fix the configuration value and run again"
            }
            SvcError::IoError(_) => "Check file paths and permissions",
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            SvcError::ApiRequestFailed { attempts, source } => {
                format!("API request failed after {} attempt(s): {}", attempts, source)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, SvcError>;
