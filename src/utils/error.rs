use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{source_name} responded with status {status} for {url}")]
    HttpStatus {
        source_name: String,
        status: u16,
        url: String,
    },

    #[error("{source_name} returned a malformed response: {message}")]
    MalformedResponse {
        source_name: String,
        message: String,
    },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration parse error in {field}: {message}")]
    ConfigParseError { field: String, message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl StatsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            StatsError::Transport(_) | StatsError::HttpStatus { .. } => ErrorCategory::Network,
            StatsError::MalformedResponse { .. } => ErrorCategory::Data,
            StatsError::IoError(_) => ErrorCategory::System,
            StatsError::ConfigError { .. }
            | StatsError::ConfigParseError { .. }
            | StatsError::MissingConfigError { .. }
            | StatsError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            StatsError::Transport(_) => ErrorSeverity::Medium,
            StatsError::HttpStatus { status, .. } if *status >= 500 || *status == 429 => {
                ErrorSeverity::Medium
            }
            StatsError::HttpStatus { .. } => ErrorSeverity::High,
            StatsError::MalformedResponse { .. } => ErrorSeverity::High,
            StatsError::ConfigError { .. }
            | StatsError::ConfigParseError { .. }
            | StatsError::MissingConfigError { .. }
            | StatsError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            StatsError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            StatsError::Transport(_) => {
                "Check the network connection and run the report again".to_string()
            }
            StatsError::HttpStatus { status: 401 | 403, source_name, .. } => {
                format!("Check the credentials configured for {}", source_name)
            }
            StatsError::HttpStatus { status, .. } if *status >= 500 || *status == 429 => {
                "The upstream service is unavailable or throttling, try again later".to_string()
            }
            StatsError::HttpStatus { .. } => {
                "Check the query parameters in the configuration".to_string()
            }
            StatsError::MalformedResponse { source_name, .. } => {
                format!("The {} API schema may have changed", source_name)
            }
            StatsError::IoError(_) => "Check that the file exists and is readable".to_string(),
            StatsError::ConfigError { .. } | StatsError::ConfigParseError { .. } => {
                "Fix the configuration file syntax".to_string()
            }
            StatsError::MissingConfigError { field } => {
                format!("Provide a value for '{}' via flag, environment or config file", field)
            }
            StatsError::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}'", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Network => format!("Could not fetch vacancies: {}", self),
            ErrorCategory::Data => format!("Unexpected data from job site: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::System => format!("System error: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, StatsError>;
