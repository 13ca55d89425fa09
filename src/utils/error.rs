use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckError {
    #[error("Employee lookup failed: {message}")]
    LookupFailed { message: String },

    #[error("Employee creation failed: {message}")]
    CreateFailed { message: String },

    #[error("Unexpected lookup status: {status}")]
    UnexpectedLookupStatus { status: u16 },

    #[error("HTTP client error: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required field: {field}")]
    MissingConfigError { field: String },

    #[error("Employee record is missing '{field}'")]
    MissingFieldError { field: String },

    #[error("Invalid employee field '{field}': {reason}")]
    InvalidRecordError { field: String, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Remote,
    Configuration,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CheckError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CheckError::LookupFailed { .. }
            | CheckError::CreateFailed { .. }
            | CheckError::ApiError(_) => ErrorCategory::Network,
            CheckError::UnexpectedLookupStatus { .. } => ErrorCategory::Remote,
            CheckError::ConfigError { .. }
            | CheckError::ConfigValidationError { .. }
            | CheckError::InvalidConfigValueError { .. }
            | CheckError::MissingConfigError { .. } => ErrorCategory::Configuration,
            CheckError::SerializationError(_)
            | CheckError::MissingFieldError { .. }
            | CheckError::InvalidRecordError { .. } => ErrorCategory::Data,
            CheckError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 對方服務暫時不可用，可以重跑
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Remote | ErrorCategory::Configuration | ErrorCategory::Data => {
                ErrorSeverity::High
            }
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CheckError::LookupFailed { .. } => {
                "Could not reach the employee lookup service".to_string()
            }
            CheckError::CreateFailed { .. } => {
                "The employee does not exist and could not be created".to_string()
            }
            CheckError::UnexpectedLookupStatus { status } => {
                format!("The lookup service answered with unsupported status {}", status)
            }
            CheckError::ApiError(_) => "The HTTP client could not be initialised".to_string(),
            CheckError::IoError(e) => format!("File access failed: {}", e),
            CheckError::SerializationError(e) => format!("Invalid employee data: {}", e),
            CheckError::ConfigError { message } => format!("Configuration problem: {}", message),
            CheckError::ConfigValidationError { field, message } => {
                format!("Configuration problem in {}: {}", field, message)
            }
            CheckError::InvalidConfigValueError { field, reason, .. } => {
                format!("Invalid {}: {}", field, reason)
            }
            CheckError::MissingConfigError { field } => format!("{} is required", field),
            CheckError::MissingFieldError { field } => {
                format!("The employee record has no {}", field)
            }
            CheckError::InvalidRecordError { field, reason } => {
                format!("Invalid employee {}: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Network => {
                "Check that the employee API is reachable and the base URL is correct"
            }
            ErrorCategory::Remote => "Check the employee API logs for the failing request",
            ErrorCategory::Configuration => "Fix the configuration value and run again",
            ErrorCategory::Data => "Check that every employee field is present and valid",
            ErrorCategory::System => "Check file permissions and available disk space",
        }
    }
}

impl ErrorSeverity {
    /// CLI 結束碼，Low 視為成功
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, CheckError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_by_category() {
        let lookup = CheckError::LookupFailed {
            message: "connection refused".to_string(),
        };
        assert_eq!(lookup.category(), ErrorCategory::Network);
        assert_eq!(lookup.severity(), ErrorSeverity::Medium);

        let status = CheckError::UnexpectedLookupStatus { status: 500 };
        assert_eq!(status.category(), ErrorCategory::Remote);
        assert_eq!(status.severity(), ErrorSeverity::High);

        let missing = CheckError::MissingConfigError {
            field: "api.base_url".to_string(),
        };
        assert_eq!(missing.severity(), ErrorSeverity::High);

        let io = CheckError::IoError(std::io::Error::other("disk"));
        assert_eq!(io.severity(), ErrorSeverity::Critical);
    }

    #[test]
    fn test_exit_codes_follow_severity() {
        assert_eq!(ErrorSeverity::Low.exit_code(), 0);
        assert_eq!(ErrorSeverity::Medium.exit_code(), 2);
        assert_eq!(ErrorSeverity::High.exit_code(), 1);
        assert_eq!(ErrorSeverity::Critical.exit_code(), 3);

        let lookup = CheckError::LookupFailed {
            message: "timeout".to_string(),
        };
        assert_eq!(lookup.severity().exit_code(), 2);
        assert_eq!(
            CheckError::UnexpectedLookupStatus { status: 418 }
                .severity()
                .exit_code(),
            1
        );
    }

    #[test]
    fn test_record_errors_are_data_errors() {
        let missing = CheckError::MissingFieldError {
            field: "email".to_string(),
        };
        assert_eq!(missing.category(), ErrorCategory::Data);
        assert_eq!(
            missing.recovery_suggestion(),
            "Check that every employee field is present and valid"
        );

        let blank = CheckError::InvalidRecordError {
            field: "mobile".to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        };
        assert_eq!(blank.category(), ErrorCategory::Data);
        assert!(blank.user_friendly_message().contains("mobile"));
    }

    #[test]
    fn test_messages() {
        let err = CheckError::UnexpectedLookupStatus { status: 503 };
        assert_eq!(err.to_string(), "Unexpected lookup status: 503");
        assert!(err.user_friendly_message().contains("503"));

        let err = CheckError::CreateFailed {
            message: "create endpoint returned status 500".to_string(),
        };
        assert!(err.to_string().contains("status 500"));
    }
}
