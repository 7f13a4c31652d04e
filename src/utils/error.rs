use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Invalid payment amount: {value}")]
    InvalidAmount { value: f64 },

    #[error("Invalid value for {field}: {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
}

impl DemoError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DemoError::InvalidAmount { .. } => ErrorSeverity::Medium,
            DemoError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::InvalidAmount { value } => {
                format!("Payment amounts must be positive, got {}", value)
            }
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration problem with '{}': {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DemoError::InvalidAmount { .. } => {
                "Pass a positive ruble amount, e.g. --amount 1000".to_string()
            }
            DemoError::InvalidConfigValueError { field, .. } => {
                format!("Check the value passed for --{}", field)
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
